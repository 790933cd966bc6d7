//! Error types for a collection run.
//!
//! Irregular data (malformed lines, shared or unmatched ports) is never an
//! error here; it is recorded as an [`Anomaly`](crate::Anomaly) on the
//! report. Only failures of the capture side abort a run.

use thiserror::Error;

/// Boxed error produced by a collaborator implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for collection operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Errors that abort a collection run.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The command executor failed to run a command.
    #[error("Failed to capture output of '{command}': {source}")]
    Capture {
        /// The command that was sent.
        command: String,
        /// The executor's error.
        #[source]
        source: BoxError,
    },

    /// The command executor returned no text at all.
    #[error("Capture of '{command}' returned no output")]
    EmptyCapture {
        /// The command that was sent.
        command: String,
    },

    /// The session sits in configuration mode.
    #[error("Session prompt '{prompt}' is in configuration mode; run from user or privileged exec mode")]
    ConfigMode {
        /// The prompt reported by the executor.
        prompt: String,
    },
}

impl CollectError {
    /// Creates a capture error from any executor error.
    pub fn capture(command: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Capture {
            command: command.into(),
            source: source.into(),
        }
    }

    /// Creates an empty capture error.
    pub fn empty_capture(command: impl Into<String>) -> Self {
        Self::EmptyCapture {
            command: command.into(),
        }
    }
}
