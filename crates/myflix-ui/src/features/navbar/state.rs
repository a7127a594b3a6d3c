//! Navigation links and logout.

use tracing::info;

use crate::core::session::SessionStore;

/// Destinations offered by the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    /// Movie catalog.
    Movies,
    /// Signed-in user's profile.
    Profile,
}

impl NavLink {
    /// Link text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movies => "Movies",
            Self::Profile => "Profile",
        }
    }

    /// Path the link routes to.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Movies => "/movies",
            Self::Profile => "/profile",
        }
    }

    /// Whether the link points at the current location.
    #[must_use]
    pub fn is_active(self, current_path: &str) -> bool {
        current_path.trim_end_matches('/') == self.path()
    }
}

/// Links to render; empty for anonymous visitors.
#[must_use]
pub fn visible_links(signed_in: bool) -> &'static [NavLink] {
    if signed_in {
        &[NavLink::Movies, NavLink::Profile]
    } else {
        &[]
    }
}

/// End the session and show the welcome dialog again on the next visit.
pub fn logout(session: &SessionStore) {
    let username = session.get().map(|user| user.username);
    session.clear();
    session.reset_welcome();
    info!(username = username.as_deref().unwrap_or_default(), "logged out");
}
