//! User profile feature: details form, favorites strip, account deletion.
//!
//! # Design
//! - Load the user first, then the catalog, and keep only favorites.
//! - Deletion needs an explicit confirmation step before any request.
//! - A confirmed edit replaces the stored user; the token is kept.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
