//! Non-fatal irregularities observed while parsing and correlating.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which capture a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// `show mac address-table` output.
    MacTable,
    /// `show interfaces status` output.
    InterfaceStatus,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::MacTable => write!(f, "mac table"),
            TableKind::InterfaceStatus => write!(f, "interface status"),
        }
    }
}

/// A data-shape irregularity that was handled rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// A line classified as a data row had too few fields and was skipped.
    #[error("{table} line {line_number}: expected at least {required} fields, found {found}: '{raw}'")]
    MalformedLine {
        table: TableKind,
        /// 1-based line number within the capture.
        line_number: usize,
        raw: String,
        found: usize,
        required: usize,
    },

    /// A port has several MAC entries; the first one was used.
    #[error("port {port} has {candidates} MAC entries, using the first")]
    AmbiguousCorrelation { port: String, candidates: usize },

    /// A port has no MAC entry.
    #[error("port {port} has no MAC entry")]
    UnresolvedCorrelation { port: String },
}

impl Anomaly {
    /// Returns true for skipped input lines.
    pub fn is_malformed_line(&self) -> bool {
        matches!(self, Anomaly::MalformedLine { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_display() {
        let anomaly = Anomaly::MalformedLine {
            table: TableKind::MacTable,
            line_number: 3,
            raw: "10 aabb.cc11.2233 dynamic".to_string(),
            found: 3,
            required: 4,
        };
        assert_eq!(
            anomaly.to_string(),
            "mac table line 3: expected at least 4 fields, found 3: '10 aabb.cc11.2233 dynamic'"
        );
        assert!(anomaly.is_malformed_line());
    }

    #[test]
    fn test_correlation_anomaly_display() {
        let anomaly = Anomaly::AmbiguousCorrelation {
            port: "Gi1/0/1".to_string(),
            candidates: 2,
        };
        assert_eq!(anomaly.to_string(), "port Gi1/0/1 has 2 MAC entries, using the first");
        assert!(!anomaly.is_malformed_line());
    }
}
