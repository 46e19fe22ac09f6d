//! Decoding and row splitting shared by all parsers.

use bestchange_types::ParseStats;
use encoding_rs::WINDOWS_1251;
use std::borrow::Cow;
use tracing::debug;

use crate::RowError;

/// Field separator used by every member.
pub(crate) const DELIMITER: char = ';';

/// Records parsed from one member, with row counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// Parsed records.
    pub records: T,
    /// Parsed and skipped row counts.
    pub stats: ParseStats,
}

impl<T> Parsed<T> {
    /// Creates a parse result.
    #[must_use]
    pub const fn new(records: T, stats: ParseStats) -> Self {
        Self { records, stats }
    }

    /// Splits the result into records and counters.
    #[must_use]
    pub fn into_parts(self) -> (T, ParseStats) {
        (self.records, self.stats)
    }
}

/// Decodes Windows-1251 bytes into UTF-8 text.
///
/// Every byte maps to a character, so decoding never fails.
#[must_use]
pub fn decode_cp1251(bytes: &[u8]) -> Cow<'_, str> {
    WINDOWS_1251.decode_without_bom_handling(bytes).0
}

/// Iterates over non-blank lines with their 1-based line numbers.
pub(crate) fn rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Splits a row into fields, checking the minimum count.
pub(crate) fn fields(line: &str, expected: usize) -> Result<Vec<&str>, RowError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < expected {
        return Err(RowError::TooFewFields {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Parses the id in field `index`.
pub(crate) fn parse_id(fields: &[&str], index: usize) -> Result<u32, RowError> {
    let value = fields[index];
    value.trim().parse().map_err(|_| RowError::InvalidId {
        index,
        value: value.to_string(),
    })
}

/// Decodes `data` and feeds every non-blank row to `apply`, counting
/// successes and skips.
pub(crate) fn parse_rows<F>(data: &[u8], member: &'static str, mut apply: F) -> ParseStats
where
    F: FnMut(&str) -> Result<(), RowError>,
{
    let text = decode_cp1251(data);
    let mut stats = ParseStats::default();

    for (line_no, line) in rows(&text) {
        match apply(line) {
            Ok(()) => stats.record_parsed(),
            Err(e) => {
                debug!(member, line = line_no, error = %e, "skipping malformed row");
                stats.record_skipped();
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cp1251() {
        // "Сбербанк" in Windows-1251
        let bytes = [0xD1, 0xE1, 0xE5, 0xF0, 0xE1, 0xE0, 0xED, 0xEA];
        assert_eq!(decode_cp1251(&bytes), "Сбербанк");
        assert_eq!(decode_cp1251(b"Tether TRC20"), "Tether TRC20");
    }

    #[test]
    fn test_rows_skip_blank_and_strip_cr() {
        let text = "1;a\r\n\r\n  \n2;b\n";
        let collected: Vec<_> = rows(text).collect();
        assert_eq!(collected, vec![(1, "1;a"), (4, "2;b")]);
    }

    #[test]
    fn test_fields_minimum() {
        assert_eq!(fields("1;2;3", 3).unwrap(), vec!["1", "2", "3"]);
        assert_eq!(
            fields("1;2", 3),
            Err(RowError::TooFewFields {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(&[" 42 "], 0), Ok(42));
        assert!(matches!(
            parse_id(&["x1"], 0),
            Err(RowError::InvalidId { index: 0, .. })
        ));
        assert!(parse_id(&["-3"], 0).is_err());
    }

    #[test]
    fn test_parse_rows_counts() {
        let stats = parse_rows(b"ok\nbad\n\nok\n", "test", |line| {
            if line == "ok" {
                Ok(())
            } else {
                Err(RowError::TooFewFields {
                    expected: 2,
                    found: 1,
                })
            }
        });
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.skipped, 1);
    }
}
