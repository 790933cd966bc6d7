//! Shared line loop for both table parsers.

use serde::Serialize;

use crate::anomaly::{Anomaly, TableKind};

/// What a table parser decided about one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineOutcome<T> {
    /// Not a data row (header, separator, filtered entry type, blank).
    Skip,
    /// A data row with all required fields.
    Record(T),
    /// A data row with too few fields.
    Malformed { found: usize, required: usize },
}

/// Records parsed from one capture, in encounter order, plus the lines
/// that were skipped as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTable<T> {
    pub records: Vec<T>,
    pub anomalies: Vec<Anomaly>,
}

impl<T> ParsedTable<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            anomalies: Vec::new(),
        }
    }
}

/// Runs `parse_line` over every line of `text`.
///
/// Lines are passed with trailing whitespace (including a stray `\r`)
/// removed.
pub(crate) fn parse_lines<T, F>(text: &str, table: TableKind, mut parse_line: F) -> ParsedTable<T>
where
    F: FnMut(&str) -> LineOutcome<T>,
{
    let mut parsed = ParsedTable::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end();
        match parse_line(line) {
            LineOutcome::Skip => {}
            LineOutcome::Record(record) => parsed.records.push(record),
            LineOutcome::Malformed { found, required } => {
                let line_number = index + 1;
                tracing::warn!(
                    table = %table,
                    line_number,
                    found,
                    required,
                    line = %line,
                    "Skipping malformed line"
                );
                parsed.anomalies.push(Anomaly::MalformedLine {
                    table,
                    line_number,
                    raw: line.to_string(),
                    found,
                    required,
                });
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(line: &str) -> LineOutcome<String> {
        match line.split_whitespace().count() {
            0 => LineOutcome::Skip,
            1 => LineOutcome::Malformed {
                found: 1,
                required: 2,
            },
            _ => LineOutcome::Record(line.to_string()),
        }
    }

    #[test]
    fn test_trailing_whitespace_and_crlf_are_trimmed() {
        let parsed = parse_lines("a b  \r\nc d\t\r\n", TableKind::MacTable, words);
        assert_eq!(parsed.records, vec!["a b".to_string(), "c d".to_string()]);
    }

    #[test]
    fn test_malformed_lines_are_recorded_with_line_numbers() {
        let parsed = parse_lines("a b\n\nlonely\nc d\n", TableKind::InterfaceStatus, words);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(
            parsed.anomalies,
            vec![Anomaly::MalformedLine {
                table: TableKind::InterfaceStatus,
                line_number: 3,
                raw: "lonely".to_string(),
                found: 1,
                required: 2,
            }]
        );
    }
}
