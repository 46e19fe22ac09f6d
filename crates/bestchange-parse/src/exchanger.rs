//! Exchangers member parser.

use bestchange_types::{Exchanger, Exchangers};

use crate::text::{fields, parse_id, parse_rows};
use crate::{Parsed, RowError};

const ID: usize = 0;
const NAME: usize = 1;
const MIN_FIELDS: usize = 2;

/// Parses one exchangers row: field 0 is the id, field 1 the name.
///
/// # Errors
///
/// Returns an error if the row has fewer than two fields or a bad id.
pub fn parse_exchanger_line(line: &str) -> Result<Exchanger, RowError> {
    let fields = fields(line, MIN_FIELDS)?;
    let id = parse_id(&fields, ID)?;
    Ok(Exchanger::new(id, fields[NAME]))
}

/// Parses the exchangers member into an id-ordered table.
#[must_use]
pub fn parse_exchangers(data: &[u8]) -> Parsed<Exchangers> {
    let mut exchangers = Exchangers::new();
    let stats = parse_rows(data, "exchangers", |line| {
        let exchanger = parse_exchanger_line(line)?;
        exchangers.insert(exchanger.id, exchanger);
        Ok(())
    });
    Parsed::new(exchangers, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;

    #[test]
    fn test_parse_exchanger_line() {
        let exchanger = parse_exchanger_line("5;FastSwap;0;1").unwrap();
        assert_eq!(exchanger, Exchanger::new(5, "FastSwap"));
    }

    #[test]
    fn test_parse_exchanger_line_too_few_fields() {
        assert!(matches!(
            parse_exchanger_line("5"),
            Err(RowError::TooFewFields { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_parse_exchangers_ascending_order() {
        let parsed = parse_exchangers(b"30;Gamma\n4;Alpha\n12;Beta\n");
        let ids: Vec<_> = parsed.records.keys().copied().collect();
        assert_eq!(ids, vec![4, 12, 30]);
        assert_eq!(parsed.stats.parsed, 3);
        assert_eq!(parsed.stats.skipped, 0);
    }

    #[test]
    fn test_parse_exchangers_decodes_cp1251() {
        let (encoded, _, _) = WINDOWS_1251.encode("7;Обменник\n8;bad id\nnope;X\n");
        let parsed = parse_exchangers(&encoded);
        assert_eq!(parsed.records[&7].name, "Обменник");
        assert_eq!(parsed.records[&8].name, "bad id");
        assert_eq!(parsed.stats.skipped, 1);
    }
}
