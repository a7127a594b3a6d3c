//! App-wide yewdux store.
//!
//! # Design
//! - Mirror only what several screens react to: the signed-in user and toasts.
//! - The session store stays the source of truth; [`AppStore::sync_session`]
//!   refreshes the mirror after any flow that touched it.

use myflix_api_models::User;
use yewdux::store::Store;

use crate::core::session::SessionStore;
use crate::core::toast::{Notice, ToastQueue};

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Signed-in user as last read from the session.
    pub user: Option<User>,
    /// Visible toasts.
    pub toasts: ToastQueue,
}

impl AppStore {
    /// Re-read the signed-in user from the session.
    pub fn sync_session(&mut self, session: &SessionStore) {
        self.user = session.get();
    }

    /// Queue a toast for display.
    pub fn notify(&mut self, notice: Notice) -> u64 {
        self.toasts.push(notice)
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
