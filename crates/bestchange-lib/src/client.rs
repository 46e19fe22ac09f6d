//! The BestChange client.

use bestchange_fetch::{BundleSource, CacheStore, DownloadClient};
use bestchange_types::{
    BestChangeError, Currencies, Currency, Dataset, Exchanger, Exchangers, LookupKind, ParseReport,
    Rate, RateTable, RatesFrom, Record, Result,
};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{BestChangeConfig, Pipeline};

/// Parsed BestChange data, loaded once at construction.
///
/// Construction runs the whole pipeline. A client either holds a complete
/// dataset from a single bundle or was never created; there is no refresh.
/// Build a new client to pick up a newer bundle.
#[derive(Debug)]
pub struct BestChange {
    dataset: Dataset,
    cache: CacheStore,
}

impl BestChange {
    /// Loads the bundle, caching it at `cache_path` for `cache_ttl`.
    ///
    /// With `cache_path` set to `None` every construction downloads the
    /// bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be fetched, cached, or opened.
    pub async fn new(cache_path: Option<PathBuf>, cache_ttl: Duration) -> Result<Self> {
        let config = match cache_path {
            Some(path) => BestChangeConfig::new().with_cache(path, cache_ttl),
            None => BestChangeConfig::new(),
        };
        Self::with_config(config).await
    }

    /// Loads the bundle with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BestChangeError::ClientSetup`] if the HTTP settings are
    /// invalid, otherwise an error if the bundle cannot be fetched, cached, or
    /// opened.
    pub async fn with_config(config: BestChangeConfig) -> Result<Self> {
        let client = DownloadClient::new(config.client.clone())
            .map_err(|e| BestChangeError::ClientSetup(e.to_string()))?;
        Self::with_source(config, client).await
    }

    /// Loads the bundle from a custom source.
    ///
    /// The HTTP settings in `config` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be fetched, cached, or opened.
    pub async fn with_source<S: BundleSource>(config: BestChangeConfig, source: S) -> Result<Self> {
        let cache = config
            .cache
            .open()
            .map_err(|e| BestChangeError::Cache(e.to_string()))?;

        let mut pipeline = Pipeline::new(cache, source);
        let dataset = pipeline.run().await?;

        Ok(Self {
            dataset,
            cache: pipeline.into_cache(),
        })
    }

    /// Returns the bundle version, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.dataset.version()
    }

    /// Returns the bundle's last-update time, if it could be parsed.
    #[must_use]
    pub const fn last_update(&self) -> Option<NaiveDateTime> {
        self.dataset.last_update()
    }

    /// Returns all currencies keyed by id.
    #[must_use]
    pub const fn currencies(&self) -> &Currencies {
        self.dataset.currencies()
    }

    /// Returns all exchangers in ascending id order.
    #[must_use]
    pub const fn exchangers(&self) -> &Exchangers {
        self.dataset.exchangers()
    }

    /// Returns all rates keyed by `from`, `to`, then exchanger id.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        self.dataset.rates()
    }

    /// Looks up `id` in the table selected by `kind`.
    #[must_use]
    pub fn lookup(&self, id: u32, kind: LookupKind) -> Option<Record<'_>> {
        self.dataset.lookup(id, kind)
    }

    /// Looks up a currency.
    #[must_use]
    pub fn currency(&self, id: u32) -> Option<&Currency> {
        self.dataset.currency(id)
    }

    /// Looks up an exchanger.
    #[must_use]
    pub fn exchanger(&self, id: u32) -> Option<&Exchanger> {
        self.dataset.exchanger(id)
    }

    /// Returns every rate quoted from `from`.
    #[must_use]
    pub fn rates_from(&self, from: u32) -> Option<&RatesFrom> {
        self.dataset.rates_from(from)
    }

    /// Returns the `from -> to` rate offered by `exchanger`.
    #[must_use]
    pub fn rate(&self, from: u32, to: u32, exchanger: u32) -> Option<&Rate> {
        self.dataset.rate(from, to, exchanger)
    }

    /// Returns the row counters gathered while parsing.
    #[must_use]
    pub const fn report(&self) -> &ParseReport {
        self.dataset.report()
    }

    /// Returns the underlying dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the path of the cache file the bundle was read from.
    #[must_use]
    pub fn cache_path(&self) -> &Path {
        self.cache.path()
    }
}
