//! Welcome dialog shown once per browsing session.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
