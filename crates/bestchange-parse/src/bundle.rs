//! Whole-bundle parsing.

use bestchange_types::{Dataset, ParseReport};
use tracing::debug;

use crate::{parse_currencies, parse_exchangers, parse_metadata, parse_rates};

/// Builds a [`Dataset`] from the raw bytes of the four bundle members.
#[must_use]
pub fn parse_members(currencies: &[u8], exchangers: &[u8], rates: &[u8], info: &[u8]) -> Dataset {
    let (currencies, currency_stats) = parse_currencies(currencies).into_parts();
    let (exchangers, exchanger_stats) = parse_exchangers(exchangers).into_parts();
    let (rates, rate_stats) = parse_rates(rates).into_parts();
    let (metadata, metadata_stats) = parse_metadata(info).into_parts();

    let report = ParseReport {
        currencies: currency_stats,
        exchangers: exchanger_stats,
        rates: rate_stats,
        metadata: metadata_stats,
    };
    debug!(?report, "bundle parsed");

    Dataset::new(currencies, exchangers, rates, metadata, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestchange_types::LookupKind;

    #[test]
    fn test_parse_members() {
        let dataset = parse_members(
            b"1;USD;US Dollar\n2;BTC;Bitcoin\n",
            b"5;FastSwap\n",
            b"1;2;5;100.0;95.5;1000\n1;2;5;0;95.5;1000\n",
            b"current_version = 2.0\n",
        );

        assert_eq!(dataset.currencies().len(), 2);
        assert_eq!(dataset.exchangers().len(), 1);
        assert_eq!(dataset.rate_count(), 1);
        assert_eq!(dataset.version(), Some("2.0"));
        assert_eq!(dataset.report().rates.skipped, 1);
        assert!(dataset.lookup(5, LookupKind::Exchangers).is_some());
    }

    #[test]
    fn test_parse_members_idempotent() {
        let members: [&[u8]; 4] = [
            b"1;USD;US Dollar\n",
            b"5;FastSwap\n3;Other\n",
            b"1;2;5;100.0;95.5;1000\n",
            b"current_version = 2.0\n",
        ];
        let first = parse_members(members[0], members[1], members[2], members[3]);
        let second = parse_members(members[0], members[1], members[2], members[3]);
        assert_eq!(first, second);
    }
}
