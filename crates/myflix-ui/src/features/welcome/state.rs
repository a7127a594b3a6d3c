//! Welcome dialog state.

use crate::core::session::SessionStore;
use crate::core::storage::StorageError;

/// Welcome dialog visibility and the "don't show again" checkbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WelcomeDialog {
    /// Whether the dialog is visible.
    pub open: bool,
    /// Checkbox state.
    pub dont_show_again: bool,
}

impl WelcomeDialog {
    /// Initial state for the current browsing session.
    #[must_use]
    pub fn for_session(session: &SessionStore) -> Self {
        Self {
            open: !session.welcome_suppressed(),
            dont_show_again: false,
        }
    }

    /// Flip the checkbox.
    pub const fn toggle_dont_show(&mut self) {
        self.dont_show_again = !self.dont_show_again;
    }

    /// Hide the dialog, remembering the checkbox for this browsing session.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the flag cannot be written; the dialog
    /// is closed regardless.
    pub fn close(&mut self, session: &SessionStore) -> Result<(), StorageError> {
        self.open = false;
        if self.dont_show_again {
            session.suppress_welcome()?;
        }
        Ok(())
    }
}
