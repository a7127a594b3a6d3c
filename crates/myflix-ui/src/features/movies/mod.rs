//! Movie list feature: the catalog strip, favorite toggles and info dialogs.

pub mod api;
pub mod dialogs;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
