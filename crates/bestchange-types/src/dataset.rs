//! The parsed bundle and its lookup surface.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Currencies, Currency, Exchanger, Exchangers, Metadata, Rate, RateTable, RatesFrom};

/// Row counters for one parsed member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Rows turned into records.
    pub parsed: usize,
    /// Non-blank rows dropped as malformed.
    pub skipped: usize,
}

impl ParseStats {
    /// Counts a row that produced a record.
    pub const fn record_parsed(&mut self) {
        self.parsed += 1;
    }

    /// Counts a row that was dropped.
    pub const fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}

/// Row counters for every member of a bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Currencies member.
    pub currencies: ParseStats,
    /// Exchangers member.
    pub exchangers: ParseStats,
    /// Rates member.
    pub rates: ParseStats,
    /// Info member.
    pub metadata: ParseStats,
}

impl ParseReport {
    /// Returns the number of skipped rows across all members.
    #[must_use]
    pub const fn total_skipped(&self) -> usize {
        self.currencies.skipped
            + self.exchangers.skipped
            + self.rates.skipped
            + self.metadata.skipped
    }
}

/// Which table a [`Dataset::lookup`] searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    /// Currencies by id.
    #[default]
    Currencies,
    /// Exchangers by id.
    Exchangers,
    /// Rates by source currency id.
    Rates,
}

impl LookupKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Currencies => "currencies",
            Self::Exchangers => "exchangers",
            Self::Rates => "rates",
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LookupKind {
    type Err = LookupKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "currencies" | "currency" => Ok(Self::Currencies),
            "exchangers" | "exchanger" => Ok(Self::Exchangers),
            "rates" | "rate" => Ok(Self::Rates),
            _ => Err(LookupKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid lookup kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKindParseError(String);

impl std::fmt::Display for LookupKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid lookup kind '{}', expected one of: currencies, exchangers, rates",
            self.0
        )
    }
}

impl std::error::Error for LookupKindParseError {}

/// A record found by [`Dataset::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record<'a> {
    /// A currency.
    Currency(&'a Currency),
    /// An exchanger.
    Exchanger(&'a Exchanger),
    /// Every rate quoted from one currency.
    Rates(&'a RatesFrom),
}

/// A fully parsed bundle.
///
/// All tables come from the same bundle. A dataset is only ever built whole;
/// there is no way to update part of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    currencies: Currencies,
    exchangers: Exchangers,
    rates: RateTable,
    metadata: Metadata,
    report: ParseReport,
}

impl Dataset {
    /// Creates a dataset from parsed tables.
    #[must_use]
    pub const fn new(
        currencies: Currencies,
        exchangers: Exchangers,
        rates: RateTable,
        metadata: Metadata,
        report: ParseReport,
    ) -> Self {
        Self {
            currencies,
            exchangers,
            rates,
            metadata,
            report,
        }
    }

    /// Returns all currencies keyed by id.
    #[must_use]
    pub const fn currencies(&self) -> &Currencies {
        &self.currencies
    }

    /// Returns all exchangers keyed by id, in ascending id order.
    #[must_use]
    pub const fn exchangers(&self) -> &Exchangers {
        &self.exchangers
    }

    /// Returns all rates keyed by `from`, `to`, then exchanger id.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the bundle metadata.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the bundle version, if the info member carried one.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.metadata.version.as_deref()
    }

    /// Returns the last-update timestamp, if it could be parsed.
    #[must_use]
    pub const fn last_update(&self) -> Option<NaiveDateTime> {
        self.metadata.last_update
    }

    /// Returns the row counters gathered while parsing.
    #[must_use]
    pub const fn report(&self) -> &ParseReport {
        &self.report
    }

    /// Looks up a currency by id.
    #[must_use]
    pub fn currency(&self, id: u32) -> Option<&Currency> {
        self.currencies.get(&id)
    }

    /// Looks up an exchanger by id.
    #[must_use]
    pub fn exchanger(&self, id: u32) -> Option<&Exchanger> {
        self.exchangers.get(&id)
    }

    /// Returns every rate quoted from `from`.
    #[must_use]
    pub fn rates_from(&self, from: u32) -> Option<&RatesFrom> {
        self.rates.get(&from)
    }

    /// Returns the rate for `from -> to` offered by `exchanger`.
    #[must_use]
    pub fn rate(&self, from: u32, to: u32, exchanger: u32) -> Option<&Rate> {
        self.rates.get(&from)?.get(&to)?.get(&exchanger)
    }

    /// Iterates over every rate for `from -> to`, in ascending exchanger id.
    pub fn rates_between(&self, from: u32, to: u32) -> impl Iterator<Item = &Rate> {
        self.rates
            .get(&from)
            .and_then(|by_to| by_to.get(&to))
            .into_iter()
            .flat_map(|by_exchanger| by_exchanger.values())
    }

    /// Iterates over every rate in the dataset.
    pub fn iter_rates(&self) -> impl Iterator<Item = &Rate> {
        self.rates
            .values()
            .flat_map(|by_to| by_to.values())
            .flat_map(|by_exchanger| by_exchanger.values())
    }

    /// Returns the number of rates in the dataset.
    #[must_use]
    pub fn rate_count(&self) -> usize {
        self.iter_rates().count()
    }

    /// Looks up `id` in the table selected by `kind`.
    ///
    /// For [`LookupKind::Rates`], `id` is a source currency id and the result
    /// holds every rate quoted from it.
    #[must_use]
    pub fn lookup(&self, id: u32, kind: LookupKind) -> Option<Record<'_>> {
        match kind {
            LookupKind::Currencies => self.currency(id).map(Record::Currency),
            LookupKind::Exchangers => self.exchanger(id).map(Record::Exchanger),
            LookupKind::Rates => self.rates_from(id).map(Record::Rates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let mut currencies = Currencies::new();
        currencies.insert(1, Currency::new(1, "US Dollar"));
        currencies.insert(2, Currency::new(2, "Bitcoin"));

        let mut exchangers = Exchangers::new();
        exchangers.insert(7, Exchanger::new(7, "Seventh"));
        exchangers.insert(5, Exchanger::new(5, "Fifth"));

        let mut rates = RateTable::new();
        for exchanger in [5, 7] {
            let rate = Rate::new(1, 2, exchanger, 100.0, 95.5, "1000").unwrap();
            rates
                .entry(1)
                .or_default()
                .entry(2)
                .or_default()
                .insert(exchanger, rate);
        }

        Dataset::new(
            currencies,
            exchangers,
            rates,
            Metadata {
                version: Some("2.0".to_string()),
                last_update: None,
            },
            ParseReport::default(),
        )
    }

    #[test]
    fn test_lookup_currency() {
        let dataset = sample_dataset();
        let record = dataset.lookup(1, LookupKind::Currencies);
        assert_eq!(
            record,
            Some(Record::Currency(&Currency::new(1, "US Dollar")))
        );
        assert!(dataset.lookup(99, LookupKind::Currencies).is_none());
    }

    #[test]
    fn test_lookup_exchanger() {
        let dataset = sample_dataset();
        assert!(matches!(
            dataset.lookup(5, LookupKind::Exchangers),
            Some(Record::Exchanger(e)) if e.name == "Fifth"
        ));
        assert!(dataset.lookup(1, LookupKind::Exchangers).is_none());
    }

    #[test]
    fn test_lookup_rates_by_source_currency() {
        let dataset = sample_dataset();
        let Some(Record::Rates(by_to)) = dataset.lookup(1, LookupKind::Rates) else {
            panic!("expected rates for currency 1");
        };
        assert_eq!(by_to[&2].len(), 2);
        assert!(dataset.lookup(2, LookupKind::Rates).is_none());
    }

    #[test]
    fn test_exchangers_ascending() {
        let dataset = sample_dataset();
        let ids: Vec<_> = dataset.exchangers().keys().copied().collect();
        assert_eq!(ids, vec![5, 7]);
    }

    #[test]
    fn test_rate_accessors() {
        let dataset = sample_dataset();
        assert!(dataset.rate(1, 2, 5).is_some());
        assert!(dataset.rate(1, 2, 6).is_none());
        assert!(dataset.rate(2, 1, 5).is_none());
        assert_eq!(dataset.rates_between(1, 2).count(), 2);
        assert_eq!(dataset.rates_between(2, 1).count(), 0);
        assert_eq!(dataset.rate_count(), 2);
        assert_eq!(dataset.version(), Some("2.0"));
    }

    #[test]
    fn test_lookup_kind_parse() {
        assert_eq!(
            "currencies".parse::<LookupKind>().unwrap(),
            LookupKind::Currencies
        );
        assert_eq!("Rates".parse::<LookupKind>().unwrap(), LookupKind::Rates);
        assert_eq!(
            "exchanger".parse::<LookupKind>().unwrap(),
            LookupKind::Exchangers
        );
        assert!("wallets".parse::<LookupKind>().is_err());
    }

    #[test]
    fn test_parse_report_total_skipped() {
        let mut report = ParseReport::default();
        report.rates.record_skipped();
        report.rates.record_skipped();
        report.metadata.record_skipped();
        report.currencies.record_parsed();
        assert_eq!(report.total_skipped(), 3);
        assert_eq!(report.currencies.parsed, 1);
    }
}
