use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A user's role as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// The identity half of a session, persisted under the `stegano_user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// The user's username.
    pub username: String,
    /// The user's role.
    pub role: Role,
}

/// The authenticated identity and credential held for the current profile.
///
/// The token is an opaque signed credential; the client only ever inspects
/// its embedded expiry claim. Zeroized on drop so the bearer credential does
/// not linger in freed memory.
#[derive(Debug, Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Session {
    /// The bearer token returned by the login endpoint.
    pub token: String,
    /// The user's username.
    #[zeroize(skip)]
    pub username: String,
    /// The user's role.
    #[zeroize(skip)]
    pub role: Role,
}

impl Session {
    /// The identity half of this session.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            username: self.username.clone(),
            role: self.role,
        }
    }
}
