//! Session persistence for the authenticated user.
//!
//! # Design
//! - Two persistent keys (`user` as JSON, `token` as an opaque string) plus one
//!   per-browsing-session flag for the welcome dialog.
//! - Passed explicitly to the API client and screens; nothing reads storage
//!   behind its back.
//! - No transaction across keys: `set` writes the user, then the token.

use std::fmt;
use std::sync::Arc;

use myflix_api_models::User;

use crate::core::storage::{MemoryStorage, StorageArea, StorageError};

/// Persistent key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user";
/// Persistent key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Per-session key suppressing the welcome dialog.
pub const WELCOME_DISMISSED_KEY: &str = "dontShowWelcomeDialog";

/// Typed view over the storage areas holding the session.
#[derive(Clone)]
pub struct SessionStore {
    persistent: Arc<dyn StorageArea>,
    ephemeral: Arc<dyn StorageArea>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_user", &self.persistent.get_item(USER_KEY).is_some())
            .field("has_token", &self.persistent.get_item(TOKEN_KEY).is_some())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Build a store over explicit persistent and per-session areas.
    #[must_use]
    pub fn new(persistent: Arc<dyn StorageArea>, ephemeral: Arc<dyn StorageArea>) -> Self {
        Self {
            persistent,
            ephemeral,
        }
    }

    /// Isolated in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()))
    }

    /// Store backed by `localStorage` and `sessionStorage`.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn browser() -> Self {
        use crate::core::storage::BrowserStorage;
        Self::new(
            Arc::new(BrowserStorage::local()),
            Arc::new(BrowserStorage::session()),
        )
    }

    /// Persist a freshly authenticated user and token.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when either write fails; the user may
    /// already be written when the token write fails.
    pub fn set(&self, user: &User, token: &str) -> Result<(), StorageError> {
        self.save_user(user)?;
        self.persistent.set_item(TOKEN_KEY, token)
    }

    /// Current user profile, `None` when logged out or unreadable.
    #[must_use]
    pub fn get(&self) -> Option<User> {
        let raw = self.persistent.get_item(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored user profile is unreadable");
                None
            }
        }
    }

    /// Bearer token, `None` when absent or blank.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.persistent
            .get_item(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// Replace the stored user profile, leaving the token untouched.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when encoding or writing fails.
    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user).map_err(|source| StorageError::Encode {
            key: USER_KEY,
            source,
        })?;
        self.persistent.set_item(USER_KEY, &encoded)
    }

    /// Forget the user and token.
    pub fn clear(&self) {
        self.persistent.remove_item(USER_KEY);
        self.persistent.remove_item(TOKEN_KEY);
    }

    /// Whether the welcome dialog was dismissed for this browsing session.
    #[must_use]
    pub fn welcome_suppressed(&self) -> bool {
        self.ephemeral
            .get_item(WELCOME_DISMISSED_KEY)
            .is_some_and(|value| value == "true")
    }

    /// Hide the welcome dialog for the rest of this browsing session.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the flag cannot be written.
    pub fn suppress_welcome(&self) -> Result<(), StorageError> {
        self.ephemeral.set_item(WELCOME_DISMISSED_KEY, "true")
    }

    /// Show the welcome dialog again.
    pub fn reset_welcome(&self) {
        self.ephemeral.remove_item(WELCOME_DISMISSED_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User::named("ann")
    }

    #[test]
    fn set_then_get_returns_user_and_token() {
        let store = SessionStore::in_memory();
        store.set(&ann(), "t1").expect("set");
        assert_eq!(store.get(), Some(ann()));
        assert_eq!(store.token().as_deref(), Some("t1"));
    }

    #[test]
    fn clear_removes_user_and_token_only() {
        let store = SessionStore::in_memory();
        store.set(&ann(), "t1").expect("set");
        store.suppress_welcome().expect("flag");
        store.clear();
        assert_eq!(store.get(), None);
        assert_eq!(store.token(), None);
        assert!(store.welcome_suppressed());
    }

    #[test]
    fn unreadable_user_reads_as_logged_out() {
        let persistent = Arc::new(MemoryStorage::new());
        persistent.set_item(USER_KEY, "[object Object]").expect("write");
        let store = SessionStore::new(persistent, Arc::new(MemoryStorage::new()));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        let store = SessionStore::in_memory();
        store.set(&ann(), "  ").expect("set");
        assert_eq!(store.token(), None);
    }

    #[test]
    fn welcome_flag_toggles() {
        let store = SessionStore::in_memory();
        assert!(!store.welcome_suppressed());
        store.suppress_welcome().expect("flag");
        assert!(store.welcome_suppressed());
        store.reset_welcome();
        assert!(!store.welcome_suppressed());
    }

    #[test]
    fn clones_share_storage() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.set(&ann(), "t1").expect("set");
        assert_eq!(other.get(), Some(ann()));
    }
}
