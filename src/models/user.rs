use serde::{Deserialize, Serialize};

use crate::models::session::Role;

/// The request payload for user login.
#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The response payload of a successful login.
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    /// The signed bearer credential.
    pub token: String,
    /// The token type; the backend always sends `Bearer`.
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    /// The authenticated username.
    pub username: String,
    /// The authenticated role.
    pub role: Role,
    /// Advisory lifetime in milliseconds; the embedded expiry claim is
    /// authoritative.
    #[serde(rename = "expiresIn", default)]
    pub expires_in: Option<i64>,
}

/// The profile returned by `GET /api/auth/me`.
#[derive(Deserialize, Debug, Clone)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// A user account as listed by the admin surface.
#[derive(Deserialize, Debug, Clone)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}

/// The request payload for creating a user account.
#[derive(Serialize, Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
