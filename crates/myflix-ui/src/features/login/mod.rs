//! Login dialog feature.
//!
//! # Design
//! - The form is a DOM-free state machine; the view only forwards input.
//! - A successful login persists the user and token before anything else runs.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
