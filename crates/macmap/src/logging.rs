//! Tracing subscriber setup.

use clap::ValueEnum;
use macmap_core::{Anomaly, SwitchReport};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines on stderr
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Builds the filter from `RUST_LOG`, falling back to `log_level`.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Logs go to stderr so report
/// output on stdout stays clean.
pub fn init_logging(log_level: &str, format: LogFormat) {
    let filter = env_filter(log_level);

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .init(),
    }
}

/// Level an anomaly is reported at after a run.
///
/// Skipped input lines are worth a warning. Unmatched and shared ports are
/// normal on an access switch and only show up at debug.
pub fn anomaly_level(anomaly: &Anomaly) -> Level {
    match anomaly {
        Anomaly::MalformedLine { .. } => Level::WARN,
        Anomaly::AmbiguousCorrelation { .. } | Anomaly::UnresolvedCorrelation { .. } => {
            Level::DEBUG
        }
    }
}

/// Logs every anomaly of the report, then one summary line.
pub fn log_anomalies(report: &SwitchReport) {
    for anomaly in &report.anomalies {
        if anomaly_level(anomaly) == Level::WARN {
            tracing::warn!("{}", anomaly);
        } else {
            tracing::debug!("{}", anomaly);
        }
    }

    if !report.anomalies.is_empty() {
        tracing::info!(
            total = report.anomalies.len(),
            malformed = report.malformed_lines(),
            ambiguous = report.summary.ambiguous,
            unresolved = report.summary.unresolved,
            "Anomaly summary"
        );
    }
}
