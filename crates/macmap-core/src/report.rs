//! Assembly of the parsed tables into the shape a report sink renders.

use chrono::{DateTime, Utc};
use macmap_types::Oui;
use serde::Serialize;

use crate::anomaly::Anomaly;
use crate::correlate::{Correlation, MacIndex};
use crate::parse::ParsedTable;
use crate::record::{InterfaceStatusRecord, MacTableRecord};
use crate::{int_status, mac_table};

/// A MAC table row with its vendor lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacRow {
    #[serde(flatten)]
    pub record: MacTableRecord,
    pub vendor_key: Option<Oui>,
}

/// An interface status row joined with the MAC table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    #[serde(flatten)]
    pub record: InterfaceStatusRecord,
    /// First MAC learned on the port, `None` if there is none.
    pub mac_address: Option<String>,
    pub vendor_key: Option<Oui>,
}

/// Outcome counts of joining status rows to the MAC table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CorrelationSummary {
    /// Status rows with exactly one MAC entry.
    pub unique: usize,
    /// Status rows whose port has several MAC entries.
    pub ambiguous: usize,
    /// Status rows with no MAC entry.
    pub unresolved: usize,
}

/// Everything one run produced, in device output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchReport {
    pub switch_name: String,
    pub captured_at: DateTime<Utc>,
    pub mac_rows: Vec<MacRow>,
    pub status_rows: Vec<StatusRow>,
    pub summary: CorrelationSummary,
    pub anomalies: Vec<Anomaly>,
}

impl SwitchReport {
    /// Parses both captures and assembles the report.
    pub fn from_captures(
        switch_name: impl Into<String>,
        captured_at: DateTime<Utc>,
        mac_text: &str,
        status_text: &str,
    ) -> Self {
        Self::assemble(
            switch_name,
            captured_at,
            mac_table::parse(mac_text),
            int_status::parse(status_text),
        )
    }

    /// Joins already parsed tables.
    pub fn assemble(
        switch_name: impl Into<String>,
        captured_at: DateTime<Utc>,
        mac: ParsedTable<MacTableRecord>,
        status: ParsedTable<InterfaceStatusRecord>,
    ) -> Self {
        let mut anomalies = mac.anomalies;
        anomalies.extend(status.anomalies);

        let mut summary = CorrelationSummary::default();
        let index = MacIndex::build(&mac.records);

        let status_rows = status
            .records
            .into_iter()
            .map(|record| {
                let correlation = index.lookup(&record.port);
                match correlation {
                    Correlation::Unresolved => {
                        summary.unresolved += 1;
                        tracing::debug!(port = %record.port, "No MAC entry for port");
                        anomalies.push(Anomaly::UnresolvedCorrelation {
                            port: record.port.clone(),
                        });
                    }
                    Correlation::Unique(_) => summary.unique += 1,
                    Correlation::Ambiguous { candidates, .. } => {
                        summary.ambiguous += 1;
                        tracing::debug!(
                            port = %record.port,
                            candidates,
                            "Port has several MAC entries, using the first"
                        );
                        anomalies.push(Anomaly::AmbiguousCorrelation {
                            port: record.port.clone(),
                            candidates,
                        });
                    }
                }

                let matched = correlation.record();
                StatusRow {
                    mac_address: matched.map(|m| m.mac_address.clone()),
                    vendor_key: matched.and_then(MacTableRecord::vendor_key),
                    record,
                }
            })
            .collect();

        let mac_rows = mac
            .records
            .into_iter()
            .map(|record| MacRow {
                vendor_key: record.vendor_key(),
                record,
            })
            .collect();

        Self {
            switch_name: switch_name.into(),
            captured_at,
            mac_rows,
            status_rows,
            summary,
            anomalies,
        }
    }

    /// Number of input lines skipped as malformed.
    pub fn malformed_lines(&self) -> usize {
        self.anomalies.iter().filter(|a| a.is_malformed_line()).count()
    }
}
