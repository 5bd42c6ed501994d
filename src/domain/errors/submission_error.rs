//! Submission error types.

use thiserror::Error;

/// Submission error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SubmissionError {
    #[error("application is incomplete: {reason}")]
    Incomplete { reason: String },

    #[error("a submission is already in progress")]
    AlreadyInFlight,

    #[error("failed to reach the form collector: {message}")]
    Connection { message: String },

    #[error("form collector did not answer in time")]
    Timeout,

    #[error("network error during submission: {message}")]
    Transport { message: String },

    #[error("failed to build HTTP client: {message}")]
    Client { message: String },
}

impl SubmissionError {
    /// Creates incomplete draft error.
    #[must_use]
    pub fn incomplete(reason: impl Into<String>) -> Self {
        Self::Incomplete {
            reason: reason.into(),
        }
    }

    /// Creates connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns whether the request left the machine and failed on the way.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Timeout | Self::Transport { .. }
        )
    }
}
