//! `show interfaces status` parser.
//!
//! The device prints a free-text `Name` (description) column between the
//! port and the status, and leaves it blank when no description is set:
//!
//! ```text
//! Port      Name               Status       Vlan       Duplex  Speed Type
//! Gi1/0/1                      connected    10         a-full a-1000 10/100/1000BaseTX
//! Gi1/0/2   printer-3rd-floor  notconnect   20           auto   auto 10/100/1000BaseTX
//! Po1                          connected    trunk      a-full a-1000
//! ```
//!
//! Columns are located by token position, not by header offsets. A
//! physical port without a description splits into exactly six tokens;
//! anything else is taken to carry one description token that shifts the
//! remaining columns right by one. Port-channels always use the shifted
//! layout. The rule is kept in [`layout_for`].

use macmap_types::PortKind;

use crate::anomaly::TableKind;
use crate::parse::{parse_lines, LineOutcome, ParsedTable};
use crate::record::InterfaceStatusRecord;

/// Token count of a physical port row with no description.
pub const NO_DESCRIPTION_TOKENS: usize = 6;

const PORT_FIELD: usize = 0;

/// Token positions of the state and VLAN columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnLayout {
    pub state: usize,
    pub vlan: usize,
}

impl ColumnLayout {
    /// Description column absent.
    pub const PLAIN: ColumnLayout = ColumnLayout { state: 1, vlan: 2 };

    /// Description column present (or assumed, for port-channels).
    pub const SHIFTED: ColumnLayout = ColumnLayout { state: 2, vlan: 3 };

    /// Tokens a row needs for this layout to yield a state.
    ///
    /// The VLAN column may be cut off; it then reads as empty.
    pub const fn required_tokens(&self) -> usize {
        self.state + 1
    }
}

/// Column layout rule table.
///
/// | has description | port-channel | layout             |
/// |-----------------|--------------|--------------------|
/// | no              | no           | state 1, vlan 2    |
/// | yes             | no           | state 2, vlan 3    |
/// | no              | yes          | state 2, vlan 3    |
/// | yes             | yes          | state 2, vlan 3    |
pub const fn layout_for(has_description: bool, is_port_channel: bool) -> ColumnLayout {
    match (has_description, is_port_channel) {
        (false, false) => ColumnLayout::PLAIN,
        (true, false) => ColumnLayout::SHIFTED,
        (false, true) => ColumnLayout::SHIFTED,
        (true, true) => ColumnLayout::SHIFTED,
    }
}

/// Parses the full capture. Records keep their encounter order.
pub fn parse(text: &str) -> ParsedTable<InterfaceStatusRecord> {
    parse_lines(text, TableKind::InterfaceStatus, parse_line)
}

fn parse_line(line: &str) -> LineOutcome<InterfaceStatusRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(port) = tokens.get(PORT_FIELD) else {
        return LineOutcome::Skip;
    };

    let has_description = tokens.len() != NO_DESCRIPTION_TOKENS;
    let layout = layout_for(has_description, PortKind::of(port).is_port_channel());

    if tokens.len() < layout.required_tokens() {
        return LineOutcome::Malformed {
            found: tokens.len(),
            required: layout.required_tokens(),
        };
    }

    let vlan = tokens.get(layout.vlan).copied().unwrap_or_default();
    if vlan.is_empty() {
        tracing::debug!(port = %port, "Interface status row ends before the VLAN column");
    }

    LineOutcome::Record(InterfaceStatusRecord::new(
        *port,
        tokens[layout.state],
        vlan,
    ))
}
