//! Parsing and correlation core for switch CLI table output.
//!
//! This crate turns the raw text of two Cisco-style show commands into
//! structured records and joins them by port:
//!
//! - [`mac_table`]: `show mac address-table dynamic` rows into
//!   [`MacTableRecord`]s
//! - [`int_status`]: `show interfaces status` rows into
//!   [`InterfaceStatusRecord`]s, including the description column heuristic
//! - [`correlate`]: first-match-wins lookup of a port's learned MAC
//! - [`report`]: the assembled [`SwitchReport`] handed to a [`ReportSink`]
//!
//! Everything that touches a device or a file sits behind a trait:
//! [`CommandExecutor`] produces the text, [`ReportSink`] persists the report
//! and [`VendorLookup`] resolves OUI keys to vendor names. The parser and
//! correlator themselves are pure functions of their input text.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use macmap_core::SwitchReport;
//!
//! let mac = "  10    aabb.cc11.2233    DYNAMIC     Gi1/0/1\n";
//! let status = "Gi1/0/1   desk-12   connected    10   a-full a-1000 10/100/1000BaseTX\n";
//!
//! let report = SwitchReport::from_captures("sw1", Utc::now(), mac, status);
//! assert_eq!(report.status_rows[0].mac_address.as_deref(), Some("aabb.cc11.2233"));
//! ```

pub mod anomaly;
pub mod capture;
pub mod collector;
pub mod correlate;
pub mod error;
pub mod int_status;
pub mod mac_table;
mod parse;
pub mod record;
pub mod report;
pub mod sink;
pub mod vendor;

// Re-export commonly used items at crate root
pub use anomaly::{Anomaly, TableKind};
pub use capture::{CommandExecutor, SessionCommands};
pub use collector::Collector;
pub use correlate::{Correlation, MacIndex};
pub use error::{BoxError, CollectError, CollectResult};
pub use int_status::{layout_for, ColumnLayout};
pub use parse::ParsedTable;
pub use record::{InterfaceStatusRecord, MacTableRecord};
pub use report::{CorrelationSummary, MacRow, StatusRow, SwitchReport};
pub use sink::ReportSink;
pub use vendor::{NoVendorLookup, VendorLookup};

pub use macmap_types::{Oui, PortKind};
