//! Request lifecycle shared by every screen.

use std::fmt::Display;

use thiserror::Error;

/// Where a screen's current request stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Request sent, awaiting the response.
    Pending,
    /// Last request failed with a user-facing message.
    Failed(String),
    /// Last request succeeded.
    Succeeded,
}

impl RequestPhase {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Failure message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Record a failure using the error's display text.
    pub fn fail(&mut self, err: &impl Display) {
        *self = Self::Failed(err.to_string());
    }
}

/// Why a form submission was not sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request from this form is already in flight.
    #[error("please wait for the current request to finish")]
    Busy,
    /// Local validation failed.
    #[error("{0}")]
    Invalid(String),
}

impl SubmitRejected {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
