//! Shared UI components.

pub(crate) mod info_dialog;
pub(crate) mod movie_card;
pub(crate) mod scroll_strip;
pub(crate) mod toast;
