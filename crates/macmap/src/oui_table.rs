//! OUI to vendor table loaded from CSV.
//!
//! Two layouts are accepted:
//!
//! - a plain two-column file, `oui,vendor`, with or without a header row
//! - the IEEE registry export (`Registry,Assignment,Organization Name,...`)
//!
//! OUI keys may use any notation [`Oui`] parses (`00:50:56`, `0050.56`,
//! `005056`).

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;
use macmap_core::{Oui, VendorLookup};

use crate::error::{MacmapError, Result};

const IEEE_OUI_COLUMN: &str = "Assignment";
const IEEE_VENDOR_COLUMN: &str = "Organization Name";

/// In-memory OUI table.
#[derive(Debug, Clone, Default)]
pub struct OuiTable {
    vendors: HashMap<Oui, String>,
}

impl OuiTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MacmapError::OuiTable(format!("failed to open {}: {}", path.display(), e))
        })?;
        let table = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), entries = table.len(), "Loaded OUI table");
        Ok(table)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Self::default();
        let mut columns = (0, 1);
        let mut skipped = 0usize;

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if index == 0 {
                if let Some(header) = header_columns(&record) {
                    columns = header;
                    continue;
                }
            }

            match (record.get(columns.0), record.get(columns.1)) {
                (Some(key), Some(vendor)) if !vendor.is_empty() => match key.parse::<Oui>() {
                    // First entry wins on duplicates
                    Ok(oui) => {
                        table.vendors.entry(oui).or_insert_with(|| vendor.to_string());
                    }
                    Err(_) => skipped += 1,
                },
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Skipped unusable OUI table rows");
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

/// Column positions if `record` is a header row.
fn header_columns(record: &StringRecord) -> Option<(usize, usize)> {
    if record.get(0).is_some_and(|field| field.parse::<Oui>().is_ok()) {
        return None;
    }
    let find = |name: &str| record.iter().position(|field| field.eq_ignore_ascii_case(name));
    match (find(IEEE_OUI_COLUMN), find(IEEE_VENDOR_COLUMN)) {
        (Some(oui), Some(vendor)) => Some((oui, vendor)),
        _ => Some((0, 1)),
    }
}

impl VendorLookup for OuiTable {
    fn vendor(&self, oui: &Oui) -> Option<&str> {
        self.vendors.get(oui).map(String::as_str)
    }
}
