use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{ApiError, Result};
use crate::models::session::{Session, Role, UserIdentity};
use crate::session::token;

/// Storage key for the bearer token.
const TOKEN_KEY: &str = "stegano_auth_token";
/// Storage key for the JSON-encoded `{username, role}` identity.
const USER_KEY: &str = "stegano_user";
/// Storage key for the UI theme preference.
const THEME_KEY: &str = "stegano-theme";

/// The persisted UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The stored wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Key-value persistence for the current profile.
///
/// Mirrors the browser-storage surface the dashboard uses: a handful of
/// string keys owned exclusively by the local profile.
pub trait StorageBackend: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`.
    fn put(&self, key: &str, value: &str) -> Result<()>;
    /// Removes the value stored under `key`.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Volatile storage, used by tests and callers that opt out of persistence.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).remove(key);
        Ok(())
    }
}

/// Durable storage backed by a single JSON document on disk.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens (or initializes) the storage document at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the JSON document.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `FileStorage`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => sonic_rs::from_str(&raw).map_err(|e| {
                ApiError::Internal(format!("Corrupt session file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = sonic_rs::to_string(entries)
            .map_err(|e| ApiError::Internal(format!("Session serialization failed: {}", e)))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Holds the current credential and identity and decides whether the client
/// is authenticated.
///
/// An expired token is never handed out: expiry detection clears the stored
/// session instead.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    /// Creates a store over an explicit backend.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Creates a volatile in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Creates a store persisted to the JSON document at `path`.
    pub fn on_disk(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Arc::new(FileStorage::open(path)?)))
    }

    /// Persists a freshly established session.
    pub fn save(&self, session: &Session) -> Result<()> {
        let identity = sonic_rs::to_string(&session.identity())
            .map_err(|e| ApiError::Internal(format!("Identity serialization failed: {}", e)))?;

        self.backend.put(TOKEN_KEY, &session.token)?;
        self.backend.put(USER_KEY, &identity)?;

        tracing::debug!("🔑 Session persisted for {}", session.username);
        Ok(())
    }

    /// The current session, if one is stored and its token is still valid.
    ///
    /// A stored token that is expired or unreadable clears the session.
    pub fn session(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY)?;

        if token::is_expired(&token) {
            tracing::info!("⏰ Stored token expired, clearing session");
            self.clear();
            return None;
        }

        let identity: UserIdentity = match self
            .backend
            .get(USER_KEY)
            .and_then(|raw| sonic_rs::from_str(&raw).ok())
        {
            Some(identity) => identity,
            None => {
                tracing::warn!("Stored identity unreadable, clearing session");
                self.clear();
                return None;
            }
        };

        Some(Session {
            token,
            username: identity.username,
            role: identity.role,
        })
    }

    /// The bearer credential to attach to outgoing requests, if any.
    pub fn bearer_token(&self) -> Option<String> {
        self.session().map(|s| s.token.clone())
    }

    /// The stored identity, if a valid session exists.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.session().map(|s| s.identity())
    }

    /// True only if a token is present and its embedded expiry is in the
    /// future.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Whether the current user holds the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self.current_user(), Some(user) if user.role == Role::Admin)
    }

    /// Clears the persisted credential and identity.
    ///
    /// Best-effort: persistence failures are logged, never surfaced.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.backend.remove(key) {
                tracing::warn!("Failed to clear {}: {}", key, e);
            }
        }
    }

    /// The persisted theme preference.
    pub fn theme(&self) -> Option<Theme> {
        self.backend.get(THEME_KEY).and_then(|raw| Theme::from_str(&raw))
    }

    /// Persists the theme preference.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.backend.put(THEME_KEY, theme.as_str())
    }
}
