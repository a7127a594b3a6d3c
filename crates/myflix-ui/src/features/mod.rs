//! Screens and their flows, one module per feature.

pub mod favorites;
pub mod login;
pub mod movies;
pub mod navbar;
pub mod profile;
pub mod registration;
pub mod welcome;
