//! Core, DOM-free primitives and helpers for the Web UI.
pub mod drag_scroll;
pub mod phase;
pub mod session;
pub mod storage;
pub mod store;
pub mod toast;
