use chrono::Duration;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::session::Session;
use crate::models::user::{LoginRequest, LoginResponse, UserProfile};
use crate::session::token;

/// Tokens with less remaining lifetime than this trigger a proactive logout.
/// No renewal is attempted; the user signs in again.
const FRESHNESS_WINDOW_MINUTES: i64 = 10;

/// Authenticates against the main backend and persists the session.
///
/// # Arguments
///
/// * `client` - The API client.
/// * `username` - The user's username.
/// * `password` - The user's password.
///
/// # Returns
///
/// A `Result` containing the established `Session`.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Session> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    tracing::info!("🔐 Login attempt for {}", username);

    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = client
        .post_json(&client.api_url("/auth/login"), &payload)
        .await
        .map_err(|e| match e {
            // Any rejection or malformed reply from the login endpoint is an
            // authentication failure, surfaced with the server's message.
            ApiError::Remote { message, .. } => ApiError::Authentication(message),
            ApiError::Protocol(message) => ApiError::Authentication(message),
            other => other,
        })?;

    let session = Session {
        token: response.token,
        username: response.username,
        role: response.role,
    };

    client.store().save(&session)?;
    tracing::info!("✅ Logged in as {} ({:?})", session.username, session.role);

    Ok(session)
}

/// Ends the local session and notifies the backend.
///
/// The persisted credential is cleared first and unconditionally; the remote
/// invalidation is best-effort and never fails the caller.
pub async fn logout(client: &ApiClient) {
    let token = client.store().session().map(|s| s.token.clone());
    client.store().clear();

    let url = client.api_url("/auth/logout");
    let mut builder = client.request(Method::POST, &url);
    if let Some(token) = token {
        // The store is already cleared; attach the old credential so the
        // server can invalidate it.
        builder = builder.bearer_auth(token);
    }

    match builder.send().await {
        Ok(_) => tracing::debug!("Server notified of logout"),
        Err(e) => tracing::warn!("Logout notification failed: {}", e),
    }

    tracing::info!("👋 Logged out");
}

/// Fetches the authenticated user's profile from `GET /api/auth/me`.
pub async fn me(client: &ApiClient) -> Result<UserProfile> {
    client.get_json(&client.api_url("/auth/me")).await
}

/// Checks that the current session is comfortably far from expiry.
///
/// A missing, undecodable, or soon-to-expire token forces a logout.
///
/// # Returns
///
/// `true` when the session is usable as-is.
pub async fn ensure_fresh(client: &ApiClient) -> bool {
    let Some(session) = client.store().session() else {
        return false;
    };

    match token::time_to_expiry(&session.token) {
        Some(left) if left > Duration::minutes(FRESHNESS_WINDOW_MINUTES) => true,
        _ => {
            tracing::info!("⏰ Token near expiry, logging out proactively");
            logout(client).await;
            false
        }
    }
}
