//! Collaborators and configuration for the `macmap` command.
//!
//! The parsing and correlation logic lives in `macmap-core`; this crate
//! supplies the concrete pieces around it:
//!
//! - [`shell`]: runs switch commands through a shell command template
//!   (typically `ssh`)
//! - [`replay`]: serves previously captured output from files
//! - [`oui_table`]: OUI to vendor table loaded from CSV
//! - [`csv_sink`] and [`json_sink`]: report writers
//! - [`config`]: TOML configuration file
//! - [`logging`]: tracing subscriber setup
//!
//! # Example
//!
//! ```ignore
//! use macmap::{config::MacmapConfig, shell::ShellExecutor, csv_sink::CsvReportSink};
//! use macmap_core::{Collector, NoVendorLookup, ReportSink};
//!
//! let config = MacmapConfig::load_or_default("/etc/macmap.toml")?;
//! let executor = ShellExecutor::new("ssh admin@10.0.0.1 {command}");
//! let report = Collector::new(executor).collect().await?;
//! let paths = CsvReportSink::new("/tmp").write_report(&report, &NoVendorLookup)?;
//! ```

pub mod config;
pub mod csv_sink;
pub mod error;
pub mod json_sink;
pub mod logging;
pub mod oui_table;
pub mod replay;
pub mod shell;

pub use error::{MacmapError, Result};

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters not allowed in report file names.
static FILE_NAME_UNSAFE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("Invalid regex pattern"));

/// Turns a switch name into something safe to use in a file name.
pub fn file_stem(switch_name: &str) -> String {
    let stem = FILE_NAME_UNSAFE_RE.replace_all(switch_name.trim(), "_");
    if stem.is_empty() {
        "switch".to_string()
    } else {
        stem.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("sw1"), "sw1");
        assert_eq!(file_stem("bldg-2.access_1"), "bldg-2.access_1");
        assert_eq!(file_stem("lab/sw 1"), "lab_sw_1");
        assert_eq!(file_stem("  "), "switch");
    }
}
