//! Client core for the SteganoAI dashboard.
//!
//! Implements the session boundary and the API-client layer: a persisted
//! session with fail-closed expiry inspection, and normalized HTTP access to
//! the two backends (the main REST API and the Flask image-analysis API).
//! Rendering stays with the caller; every operation here returns typed data
//! or a user-facing error message.

pub mod client;
pub mod config;
pub mod error;

pub mod models {
    pub mod flask;
    pub mod image;
    pub mod session;
    pub mod user;
}

pub mod session {
    pub mod store;
    pub mod token;
}

pub mod services {
    pub mod auth;
    pub mod flask;
    pub mod images;
    pub mod users;
}

pub mod validation {
    pub mod upload;
}

pub use client::ApiClient;
pub use config::Config;
pub use error::{ApiError, Result};
pub use session::store::SessionStore;
