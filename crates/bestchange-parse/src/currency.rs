//! Currencies member parser.

use bestchange_types::{Currencies, Currency};

use crate::text::{fields, parse_id, parse_rows};
use crate::{Parsed, RowError};

const ID: usize = 0;
const NAME: usize = 2;
const MIN_FIELDS: usize = 3;

/// Parses one currencies row: field 0 is the id, field 2 the name.
///
/// # Errors
///
/// Returns an error if the row has fewer than three fields or a bad id.
pub fn parse_currency_line(line: &str) -> Result<Currency, RowError> {
    let fields = fields(line, MIN_FIELDS)?;
    let id = parse_id(&fields, ID)?;
    Ok(Currency::new(id, fields[NAME]))
}

/// Parses the currencies member.
///
/// Malformed rows are skipped. When an id repeats, the last row wins.
#[must_use]
pub fn parse_currencies(data: &[u8]) -> Parsed<Currencies> {
    let mut currencies = Currencies::new();
    let stats = parse_rows(data, "currencies", |line| {
        let currency = parse_currency_line(line)?;
        currencies.insert(currency.id, currency);
        Ok(())
    });
    Parsed::new(currencies, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;

    #[test]
    fn test_parse_currency_line() {
        let currency = parse_currency_line("1;USD;US Dollar").unwrap();
        assert_eq!(currency, Currency::new(1, "US Dollar"));
    }

    #[test]
    fn test_parse_currency_line_extra_fields() {
        let currency = parse_currency_line("93;35;Bitcoin (BTC);BTC;1").unwrap();
        assert_eq!(currency.id, 93);
        assert_eq!(currency.name, "Bitcoin (BTC)");
    }

    #[test]
    fn test_parse_currency_line_too_few_fields() {
        assert_eq!(
            parse_currency_line("1;USD"),
            Err(RowError::TooFewFields {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_currencies_skips_malformed_rows() {
        let data = b"1;USD;US Dollar\nbroken\nx;EUR;Euro\n2;EUR;Euro\n\n";
        let parsed = parse_currencies(data);

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[&2].name, "Euro");
        assert_eq!(parsed.stats.parsed, 2);
        assert_eq!(parsed.stats.skipped, 2);
    }

    #[test]
    fn test_parse_currencies_last_duplicate_wins() {
        let parsed = parse_currencies(b"1;a;First\n1;b;Second\n");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[&1].name, "Second");
    }

    #[test]
    fn test_parse_currencies_decodes_cp1251() {
        let (encoded, _, _) = WINDOWS_1251.encode("10;5;Сбербанк RUB\r\n");
        let parsed = parse_currencies(&encoded);
        assert_eq!(parsed.records[&10].name, "Сбербанк RUB");
    }
}
