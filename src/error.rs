use thiserror::Error;

/// The client's error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An authentication error (bad credentials or an expired session).
    /// Carries the server's message verbatim so the view layer can surface
    /// it unchanged.
    #[error("{0}")]
    Authentication(String),

    /// A non-success response carrying a server-provided message.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// A successful response that violated the JSON contract.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A local validation error, raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transport-level error from the HTTP client.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal client error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A `Result` type that uses `ApiError` as the error type.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Whether the error should force a logout and return to the login entry.
    pub fn is_session_expiry(&self) -> bool {
        matches!(
            self,
            ApiError::Authentication(_) | ApiError::Remote { status: 401, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_auth_failures_force_logout() {
        assert!(ApiError::Authentication("session expired".to_string()).is_session_expiry());
        assert!(ApiError::Remote {
            status: 401,
            message: "not authenticated".to_string(),
        }
        .is_session_expiry());

        assert!(!ApiError::Remote {
            status: 502,
            message: "bad gateway".to_string(),
        }
        .is_session_expiry());
        assert!(!ApiError::Validation("file too large".to_string()).is_session_expiry());
    }
}
