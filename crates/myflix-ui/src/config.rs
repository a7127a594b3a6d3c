//! Client configuration: where the myFlix API lives.
//!
//! # Design
//! - A single validated base URL; everything else is derived per request.
//! - Native builds read `MYFLIX_API_URL` at runtime, wasm builds at compile time.

use thiserror::Error;
use url::Url;

/// Hosted myFlix API used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://dark-blue-lizard-kilt.cyclic.app/";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "MYFLIX_API_URL";

/// Errors raised while building the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API URL did not parse.
    #[error("invalid API URL")]
    InvalidUrl {
        /// Offending input.
        value: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
    /// The API URL uses a scheme other than http(s).
    #[error("unsupported API URL scheme")]
    UnsupportedScheme {
        /// Offending scheme.
        scheme: String,
    },
}

/// Connection settings for the API gateway client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub api_url: Url,
}

impl ClientConfig {
    /// Build a configuration from an explicit base URL.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the URL is malformed or not http(s).
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_api_url(api_url)?,
        })
    }

    /// Build a configuration from `MYFLIX_API_URL`, falling back to the default.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the override is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&configured_api_url().unwrap_or_else(|| DEFAULT_API_URL.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_api_url() -> Option<String> {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn configured_api_url() -> Option<String> {
    option_env!("MYFLIX_API_URL")
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

/// Parse and validate an API base URL.
///
/// # Errors
/// Returns a [`ConfigError`] when the URL is malformed or not http(s).
pub fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        value: value.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
