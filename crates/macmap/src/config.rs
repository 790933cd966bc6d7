//! Configuration file support for macmap
//!
//! Loads configuration from a TOML file. A missing file means defaults;
//! values given on the command line override the file.
//!
//! ```toml
//! [session]
//! switch_name = "access-3"
//! paging_off = "terminal length 0"
//!
//! [shell]
//! command_template = "ssh -T admin@10.0.0.3 {command}"
//! timeout_secs = 20
//!
//! [report]
//! output_dir = "/var/tmp/macmap"
//! format = "csv"
//! oui_table = "/usr/share/macmap/oui.csv"
//! ```

use crate::error::{MacmapError, Result};
use clap::ValueEnum;
use macmap_core::SessionCommands;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/macmap/macmap.toml";

/// Device session configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name used in report file names when the prompt is unknown
    pub switch_name: Option<String>,

    /// Session prompt, e.g. `access-3#`
    pub prompt: Option<String>,

    #[serde(flatten)]
    pub commands: SessionCommands,
}

/// Shell executor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Shell command line with a `{command}` placeholder
    #[serde(default)]
    pub command_template: Option<String>,

    /// Per-command timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory for report files; the system temp dir when unset
    pub output_dir: Option<PathBuf>,

    pub format: ReportFormat,

    /// CSV file mapping OUIs to vendor names
    pub oui_table: Option<PathBuf>,
}

/// Complete macmap configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacmapConfig {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            command_template: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MacmapConfig {
    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                let config = toml::from_str(&content).map_err(|e| {
                    MacmapError::Configuration(format!(
                        "Failed to parse config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                tracing::debug!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(MacmapError::Io(e)),
        }
    }

    /// Shell command timeout as Duration
    pub fn shell_timeout(&self) -> Duration {
        Duration::from_secs(self.shell.timeout_secs)
    }

    /// Report directory, defaulting to the system temp dir
    pub fn output_dir(&self) -> PathBuf {
        self.report
            .output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Check that values are usable
    pub fn validate(&self) -> Result<()> {
        if self.shell.timeout_secs == 0 {
            return Err(MacmapError::configuration("shell.timeout_secs must be > 0"));
        }
        if self.session.commands.mac_table.trim().is_empty() {
            return Err(MacmapError::configuration("session.mac_table must not be empty"));
        }
        if self.session.commands.interface_status.trim().is_empty() {
            return Err(MacmapError::configuration(
                "session.interface_status must not be empty",
            ));
        }
        Ok(())
    }
}
