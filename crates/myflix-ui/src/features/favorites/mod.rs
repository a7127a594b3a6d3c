//! Favorite toggling shared by the movie list and the profile strip.
//!
//! # Design
//! - Membership is decided from the session copy, never from screen state.
//! - The gateway mirrors the confirmed change into the session; screens only
//!   re-render from it.

pub mod api;
