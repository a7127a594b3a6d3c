//! # Design
//!
//! - One flat error type for the API gateway; transport failures of every kind
//!   collapse into [`ApiError::RequestFailed`].
//! - Constant, user-presentable messages; context lives in fields and logs.

use thiserror::Error;

use crate::core::storage::StorageError;

/// Message shown to the user for every failed remote call.
pub const REQUEST_FAILED_MESSAGE: &str = "Something bad happened; please try again later.";

/// Result type for API gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by the API gateway client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error or non-success HTTP status.
    #[error("Something bad happened; please try again later.")]
    RequestFailed {
        /// Gateway operation that failed.
        operation: &'static str,
        /// HTTP status when a response was received.
        status: Option<u16>,
    },
    /// The current user was requested with no session present.
    #[error("User not found")]
    UserNotFound,
    /// A successful response did not match the endpoint's payload shape.
    #[error("unexpected response from the server")]
    Decode {
        /// Gateway operation whose payload failed to decode.
        operation: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The session could not be written after a confirmed change.
    #[error("could not save your session")]
    Storage {
        /// Gateway operation that attempted the write.
        operation: &'static str,
        /// Underlying storage error.
        source: StorageError,
    },
    /// The configured base URL cannot be extended with path segments.
    #[error("invalid API endpoint")]
    InvalidEndpoint {
        /// Base URL that was rejected.
        base: String,
    },
}

impl ApiError {
    pub(crate) const fn request_failed(operation: &'static str, status: Option<u16>) -> Self {
        Self::RequestFailed { operation, status }
    }

    /// HTTP status attached to a failed request, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether this is the generic remote-call failure.
    #[must_use]
    pub const fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }
}
