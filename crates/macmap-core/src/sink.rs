//! Report sink seam.

use crate::report::SwitchReport;
use crate::vendor::VendorLookup;

/// Persists a finished report.
///
/// Sinks only render: correlation and vendor keys are already resolved on
/// the report, and vendor names come from the given lookup.
pub trait ReportSink {
    /// What the sink hands back, e.g. the paths it wrote.
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    fn write_report(
        &mut self,
        report: &SwitchReport,
        vendors: &dyn VendorLookup,
    ) -> Result<Self::Output, Self::Error>;
}
