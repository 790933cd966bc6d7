//! Error types for the macmap collaborators.

use std::io;
use thiserror::Error;

/// Errors raised by executors, sinks, the OUI table and configuration.
#[derive(Error, Debug)]
pub enum MacmapError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to spawn the shell for a command.
    #[error("Failed to execute shell command '{command}': {source}")]
    ShellExec {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Shell command returned non-zero exit code.
    #[error("Shell command failed: '{command}' (exit code {exit_code}): {output}")]
    ShellCommandFailed {
        command: String,
        exit_code: i32,
        /// Combined stdout/stderr output.
        output: String,
    },

    /// Shell command ran past its timeout.
    #[error("Shell command timed out after {timeout_secs}s: '{command}'")]
    ShellTimeout { command: String, timeout_secs: u64 },

    /// Replay executor has no capture for a command.
    #[error("No replay capture for command '{0}'")]
    ReplayMissing(String),

    /// Replayed command ends in an include filter that is not a valid regex.
    #[error("Invalid include filter '{pattern}' in replayed command: {source}")]
    ReplayFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// OUI table could not be loaded.
    #[error("OUI table error: {0}")]
    OuiTable(String),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for macmap collaborator operations.
pub type Result<T> = std::result::Result<T, MacmapError>;

impl MacmapError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
