//! JSON report sink.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use macmap_core::{ReportSink, SwitchReport, VendorLookup};
use serde::Serialize;

use crate::error::{MacmapError, Result};
use crate::file_stem;

/// Report plus the vendor names resolved for its OUI keys.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a SwitchReport,
    vendors: BTreeMap<String, &'a str>,
}

/// Writes the report as `<switch>_report.json`.
#[derive(Debug, Clone)]
pub struct JsonReportSink {
    output_dir: PathBuf,
}

impl JsonReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Serializes the report with resolved vendor names.
    pub fn to_json_string(report: &SwitchReport, vendors: &dyn VendorLookup) -> Result<String> {
        let keys = report
            .mac_rows
            .iter()
            .filter_map(|row| row.vendor_key)
            .chain(report.status_rows.iter().filter_map(|row| row.vendor_key));

        let mut resolved = BTreeMap::new();
        for oui in keys {
            if let Some(vendor) = vendors.vendor(&oui) {
                resolved.insert(oui.to_string(), vendor);
            }
        }

        let json = JsonReport {
            report,
            vendors: resolved,
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

impl ReportSink for JsonReportSink {
    type Output = Vec<PathBuf>;
    type Error = MacmapError;

    fn write_report(
        &mut self,
        report: &SwitchReport,
        vendors: &dyn VendorLookup,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("{}_report.json", file_stem(&report.switch_name)));
        fs::write(&path, Self::to_json_string(report, vendors)?)?;

        tracing::info!(path = %path.display(), "Wrote JSON report");
        Ok(vec![path])
    }
}
