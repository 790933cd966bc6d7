//! `show mac address-table dynamic` parser.
//!
//! Expected row shape, fields separated by runs of whitespace:
//!
//! ```text
//!   10    aabb.cc11.2233    DYNAMIC     Gi1/0/1
//! ```
//!
//! The capture is filtered on the device (`| include Gi`), so headers and
//! non-interface entries are mostly gone already. A line counts as a data
//! row only when it mentions `dynamic` in any case; that drops the
//! remaining header and separator lines as well as static entries.

use crate::anomaly::TableKind;
use crate::parse::{parse_lines, LineOutcome, ParsedTable};
use crate::record::MacTableRecord;

/// Entry type marker that makes a line a data row.
pub const DYNAMIC_MARKER: &str = "dynamic";

const VLAN_FIELD: usize = 0;
const MAC_FIELD: usize = 1;
const PORT_FIELD: usize = 3;

/// Fields a data row must have to reach [`PORT_FIELD`].
pub const MIN_FIELDS: usize = PORT_FIELD + 1;

/// Returns true if `line` is a dynamic MAC table entry.
pub fn is_data_row(line: &str) -> bool {
    line.to_ascii_lowercase().contains(DYNAMIC_MARKER)
}

/// Parses the full capture. Records keep their encounter order.
pub fn parse(text: &str) -> ParsedTable<MacTableRecord> {
    parse_lines(text, TableKind::MacTable, parse_line)
}

fn parse_line(line: &str) -> LineOutcome<MacTableRecord> {
    if !is_data_row(line) {
        return LineOutcome::Skip;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return LineOutcome::Malformed {
            found: fields.len(),
            required: MIN_FIELDS,
        };
    }

    LineOutcome::Record(MacTableRecord::new(
        fields[PORT_FIELD],
        fields[MAC_FIELD],
        fields[VLAN_FIELD],
    ))
}
