//! CSV report sink.
//!
//! Writes one file per table into the output directory:
//!
//! - `<switch>_mac_table.csv`: `Port,MAC Address,Vlan,Vendor,Captured At`
//! - `<switch>_int_status.csv`: `Port,State,VLAN,MAC Address,Vendor,Captured At`

use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use macmap_core::{ReportSink, SwitchReport, VendorLookup};

use crate::error::{MacmapError, Result};
use crate::file_stem;

const MAC_TABLE_HEADER: [&str; 5] = ["Port", "MAC Address", "Vlan", "Vendor", "Captured At"];
const INT_STATUS_HEADER: [&str; 6] = ["Port", "State", "VLAN", "MAC Address", "Vendor", "Captured At"];

/// Writes the report as two CSV files.
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    output_dir: PathBuf,
}

impl CsvReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn write_mac_table(
        &self,
        path: &Path,
        report: &SwitchReport,
        vendors: &dyn VendorLookup,
        captured_at: &str,
    ) -> Result<()> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(MAC_TABLE_HEADER)?;

        for row in &report.mac_rows {
            wtr.write_record([
                row.record.port.as_str(),
                row.record.mac_address.as_str(),
                row.record.vlan.as_str(),
                vendors.vendor_or_blank(row.vendor_key.as_ref()),
                captured_at,
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_int_status(
        &self,
        path: &Path,
        report: &SwitchReport,
        vendors: &dyn VendorLookup,
        captured_at: &str,
    ) -> Result<()> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(INT_STATUS_HEADER)?;

        for row in &report.status_rows {
            wtr.write_record([
                row.record.port.as_str(),
                row.record.state.as_str(),
                row.record.vlan.as_str(),
                row.mac_address.as_deref().unwrap_or(""),
                vendors.vendor_or_blank(row.vendor_key.as_ref()),
                captured_at,
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl ReportSink for CsvReportSink {
    type Output = Vec<PathBuf>;
    type Error = MacmapError;

    fn write_report(
        &mut self,
        report: &SwitchReport,
        vendors: &dyn VendorLookup,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let stem = file_stem(&report.switch_name);
        let captured_at = report.captured_at.to_rfc3339();

        let mac_path = self.output_dir.join(format!("{}_mac_table.csv", stem));
        self.write_mac_table(&mac_path, report, vendors, &captured_at)?;

        let status_path = self.output_dir.join(format!("{}_int_status.csv", stem));
        self.write_int_status(&status_path, report, vendors, &captured_at)?;

        tracing::info!(
            mac_table = %mac_path.display(),
            int_status = %status_path.display(),
            "Wrote CSV report"
        );

        Ok(vec![mac_path, status_path])
    }
}
