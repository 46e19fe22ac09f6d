//! Rates member parser.

use bestchange_types::{Rate, RateTable};

use crate::text::{fields, parse_id, parse_rows};
use crate::{Parsed, RowError};

const FROM: usize = 0;
const TO: usize = 1;
const EXCHANGER: usize = 2;
const GIVE: usize = 3;
const RECEIVE: usize = 4;
const RESERVE: usize = 5;

/// Rows shorter than this are trailers or junk.
const MIN_FIELDS: usize = 5;

fn parse_amount(fields: &[&str], index: usize) -> Result<f64, RowError> {
    let value = fields[index];
    value.trim().parse().map_err(|_| RowError::InvalidAmount {
        index,
        value: value.to_string(),
    })
}

/// Parses one rates row: `from;to;exchanger;give;receive;reserve`.
///
/// Both amounts are validated before the rate is computed. A row with only
/// five fields gets an empty reserve.
///
/// # Errors
///
/// Returns an error if the row is short, an id or amount does not parse, or
/// an amount is not strictly positive.
pub fn parse_rate_line(line: &str) -> Result<Rate, RowError> {
    let fields = fields(line, MIN_FIELDS)?;

    let from = parse_id(&fields, FROM)?;
    let to = parse_id(&fields, TO)?;
    let exchanger = parse_id(&fields, EXCHANGER)?;
    let give = parse_amount(&fields, GIVE)?;
    let receive = parse_amount(&fields, RECEIVE)?;
    let reserve = fields.get(RESERVE).copied().unwrap_or_default();

    Rate::new(from, to, exchanger, give, receive, reserve)
        .ok_or(RowError::NonPositiveAmount { give, receive })
}

/// Parses the rates member into a `from -> to -> exchanger` table.
///
/// Invalid rows are skipped. A later row for the same triple replaces an
/// earlier one.
#[must_use]
pub fn parse_rates(data: &[u8]) -> Parsed<RateTable> {
    let mut rates = RateTable::new();
    let stats = parse_rows(data, "rates", |line| {
        let rate = parse_rate_line(line)?;
        rates
            .entry(rate.from_currency_id)
            .or_default()
            .entry(rate.to_currency_id)
            .or_default()
            .insert(rate.exchanger_id, rate);
        Ok(())
    });
    Parsed::new(rates, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_rate_line() {
        let rate = parse_rate_line("1;2;5;100.0;95.5;1000").unwrap();
        assert_eq!(rate.key(), (1, 2, 5));
        assert_relative_eq!(rate.rate_give, 100.0);
        assert_relative_eq!(rate.rate_receive, 95.5);
        assert_relative_eq!(rate.rate, 1.0471, epsilon = 1e-4);
        assert_eq!(rate.reserve, "1000");
    }

    #[test]
    fn test_parse_rate_line_zero_give() {
        assert!(matches!(
            parse_rate_line("1;2;5;0;95.5;1000"),
            Err(RowError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_parse_rate_line_zero_receive() {
        assert!(matches!(
            parse_rate_line("1;2;5;100;0.0;1000"),
            Err(RowError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_parse_rate_line_bad_amount() {
        assert!(matches!(
            parse_rate_line("1;2;5;abc;95.5;1000"),
            Err(RowError::InvalidAmount { index: 3, .. })
        ));
    }

    #[test]
    fn test_parse_rate_line_five_fields() {
        let rate = parse_rate_line("3;4;9;1;2").unwrap();
        assert_eq!(rate.reserve, "");
        assert_relative_eq!(rate.rate, 0.5);
    }

    #[test]
    fn test_parse_rate_line_short() {
        assert!(matches!(
            parse_rate_line("1;2;5;100"),
            Err(RowError::TooFewFields { expected: 5, found: 4 })
        ));
    }

    #[test]
    fn test_parse_rates_skips_and_overwrites() {
        let data = b"1;2;5;100.0;95.5;1000;0.1\n\
                     1;2;5;0;95.5;1000\n\
                     1;2;6;1;1;50\n\
                     1;2;5;200.0;100.0;2000\n\
                     2;1;5;1;-4;0\n\
                     trailer\n";
        let parsed = parse_rates(data);

        assert_eq!(parsed.stats.parsed, 3);
        assert_eq!(parsed.stats.skipped, 3);

        let by_exchanger = &parsed.records[&1][&2];
        assert_eq!(by_exchanger.len(), 2);
        assert_relative_eq!(by_exchanger[&5].rate, 2.0);
        assert_eq!(by_exchanger[&5].reserve, "2000");
        assert!(!parsed.records.contains_key(&2));
    }

    #[test]
    fn test_parse_rates_never_keeps_zero_operands() {
        let data = b"1;2;5;0;1;0\n1;2;6;1;0;0\n1;2;7;0.0;0.0;0\n3;4;5;2;4;9\n";
        let parsed = parse_rates(data);

        for by_to in parsed.records.values() {
            for by_exchanger in by_to.values() {
                for rate in by_exchanger.values() {
                    assert!(rate.rate_give > 0.0);
                    assert!(rate.rate_receive > 0.0);
                    assert_relative_eq!(rate.rate, rate.rate_give / rate.rate_receive);
                }
            }
        }
        assert_eq!(parsed.stats.parsed, 1);
    }

    #[test]
    fn test_parse_rates_is_deterministic() {
        let data = b"1;2;5;100.0;95.5;1000\n7;8;9;3;4;x\n";
        assert_eq!(parse_rates(data), parse_rates(data));
    }
}
