use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

/// Default origin of the main (Spring) backend.
const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Default origin of the Flask analysis backend.
const DEFAULT_FLASK_URL: &str = "http://localhost:5000";
/// The Flask blueprint lives under a versioned prefix; the dev proxy used to
/// rewrite `/flask` to this path, the client now targets it directly.
pub const FLASK_API_PREFIX: &str = "/api/v2";
/// Default local upload size cap in megabytes.
const DEFAULT_MAX_UPLOAD_MB: u64 = 10;

/// The client's configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Origin of the main backend (`/api` routes).
    pub api_base_url: String,
    /// Origin of the Flask analysis backend.
    pub flask_base_url: String,
    /// Maximum accepted upload size in bytes, enforced before any request.
    pub max_upload_bytes: u64,
    /// Location of the persisted session document.
    pub session_file: PathBuf,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let max_upload_mb: u64 = env::var("STEGANO_MAX_UPLOAD_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_MB.to_string())
            .parse()
            .context("Invalid STEGANO_MAX_UPLOAD_MB")?;

        let session_file = match env::var("STEGANO_SESSION_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_session_file()?,
        };

        Ok(Self {
            api_base_url: env::var("STEGANO_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            flask_base_url: env::var("STEGANO_FLASK_URL")
                .unwrap_or_else(|_| DEFAULT_FLASK_URL.to_string()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            session_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            flask_base_url: DEFAULT_FLASK_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            session_file: PathBuf::from("session.json"),
        }
    }
}

/// Resolves the default session file under the platform data directory.
fn default_session_file() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .context("Could not resolve the local data directory")?;
    Ok(base.join("stegano-client").join("session.json"))
}
