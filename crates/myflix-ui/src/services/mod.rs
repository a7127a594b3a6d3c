//! Remote service clients.

pub mod api;
