//! String key/value storage areas backing the session store.
//!
//! # Design
//! - Mirror the browser's two scopes: persistent (`localStorage`) and
//!   per-browsing-session (`sessionStorage`).
//! - Keep the trait object-safe so the session store can hold either backend.
//! - Reads never fail; a missing or unreadable key is simply absent.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors raised while writing to a storage area.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend refused the write (quota exceeded, storage disabled).
    #[error("storage write rejected")]
    Rejected {
        /// Key being written.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
    /// A value could not be encoded before writing.
    #[error("storage value encoding failed")]
    Encode {
        /// Key being written.
        key: &'static str,
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

/// One scope of string key/value storage.
pub trait StorageArea: Send + Sync {
    /// Read a value, `None` when absent.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns [`StorageError::Rejected`] when the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value; removing an absent key is a no-op.
    fn remove_item(&self, key: &str);
}

/// Process-local storage used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the area holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Browser storage scope.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserScope {
    /// `window.localStorage`.
    Local,
    /// `window.sessionStorage`.
    Session,
}

/// Storage area backed by the browser's Web Storage API.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    scope: BrowserScope,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// `localStorage`-backed area.
    #[must_use]
    pub const fn local() -> Self {
        Self {
            scope: BrowserScope::Local,
        }
    }

    /// `sessionStorage`-backed area.
    #[must_use]
    pub const fn session() -> Self {
        Self {
            scope: BrowserScope::Session,
        }
    }

    fn raw(self) -> web_sys::Storage {
        use gloo::storage::{LocalStorage, SessionStorage, Storage};
        match self.scope {
            BrowserScope::Local => LocalStorage::raw(),
            BrowserScope::Session => SessionStorage::raw(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageArea for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }

    fn remove_item(&self, key: &str) {
        if let Err(err) = self.raw().remove_item(key) {
            tracing::warn!(key, detail = ?err, "storage remove failed");
        }
    }
}
