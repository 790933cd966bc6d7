//! Port-keyed lookup from interface status rows into the MAC table.
//!
//! Ports are matched by exact string equality. When a port learned several
//! MACs the first one in MAC table order wins; the extra entries stay in
//! the MAC table rows of the report but are not attached to the status row.

use std::collections::HashMap;

use crate::record::MacTableRecord;

/// Outcome of looking up one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation<'a> {
    /// No MAC entry for the port.
    Unresolved,
    /// Exactly one MAC entry.
    Unique(&'a MacTableRecord),
    /// Several MAC entries; `first` is the earliest in table order.
    Ambiguous {
        first: &'a MacTableRecord,
        candidates: usize,
    },
}

impl<'a> Correlation<'a> {
    /// The MAC entry attached to the port, if any.
    pub fn record(&self) -> Option<&'a MacTableRecord> {
        match *self {
            Correlation::Unresolved => None,
            Correlation::Unique(record) => Some(record),
            Correlation::Ambiguous { first, .. } => Some(first),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PortEntries {
    first: usize,
    count: usize,
}

/// Index of MAC table records by port.
#[derive(Debug, Clone)]
pub struct MacIndex<'a> {
    records: &'a [MacTableRecord],
    by_port: HashMap<&'a str, PortEntries>,
}

impl<'a> MacIndex<'a> {
    pub fn build(records: &'a [MacTableRecord]) -> Self {
        let mut by_port: HashMap<&'a str, PortEntries> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            by_port
                .entry(record.port.as_str())
                .and_modify(|entries| entries.count += 1)
                .or_insert(PortEntries {
                    first: position,
                    count: 1,
                });
        }
        Self { records, by_port }
    }

    pub fn lookup(&self, port: &str) -> Correlation<'a> {
        match self.by_port.get(port) {
            None => Correlation::Unresolved,
            Some(entries) if entries.count == 1 => Correlation::Unique(&self.records[entries.first]),
            Some(entries) => Correlation::Ambiguous {
                first: &self.records[entries.first],
                candidates: entries.count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> Vec<MacTableRecord> {
        vec![
            MacTableRecord::new("Gi1/0/1", "aabb.cc11.2233", "10"),
            MacTableRecord::new("Gi1/0/1", "aabb.cc44.5566", "10"),
            MacTableRecord::new("Gi1/0/2", "aabb.cc77.8899", "20"),
        ]
    }

    #[test]
    fn test_first_match_wins() {
        let records = table();
        let index = MacIndex::build(&records);
        let correlation = index.lookup("Gi1/0/1");
        assert_eq!(
            correlation,
            Correlation::Ambiguous {
                first: &records[0],
                candidates: 2,
            }
        );
        assert_eq!(
            correlation.record().map(|r| r.mac_address.as_str()),
            Some("aabb.cc11.2233")
        );
    }

    #[test]
    fn test_first_match_follows_table_order() {
        let mut records = table();
        records.swap(0, 1);
        let index = MacIndex::build(&records);
        assert_eq!(
            index.lookup("Gi1/0/1").record().map(|r| r.mac_address.as_str()),
            Some("aabb.cc44.5566")
        );
    }

    #[test]
    fn test_unique_and_unresolved() {
        let records = table();
        let index = MacIndex::build(&records);
        assert_eq!(index.lookup("Gi1/0/2"), Correlation::Unique(&records[2]));
        assert_eq!(index.lookup("Gi1/0/3"), Correlation::Unresolved);
        assert_eq!(index.lookup("Gi1/0/3").record(), None);
    }

    #[test]
    fn test_exact_port_match_only() {
        let records = table();
        let index = MacIndex::build(&records);
        assert_eq!(index.lookup("gi1/0/1"), Correlation::Unresolved);
        assert_eq!(index.lookup("Gi1/0/1 "), Correlation::Unresolved);
        assert_eq!(index.lookup("Gi1/0/10"), Correlation::Unresolved);
    }
}
