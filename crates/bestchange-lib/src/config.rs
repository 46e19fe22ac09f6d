//! Client configuration.

use bestchange_fetch::{CacheError, CacheStore, ClientConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Default freshness window for a cached bundle.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Whether and where the downloaded bundle is kept between loads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Always download; the bundle goes to a private scratch file.
    #[default]
    Disabled,
    /// Reuse the bundle at `path` while it is younger than `ttl`.
    Persistent {
        /// Cache file location.
        path: PathBuf,
        /// Freshness window.
        ttl: Duration,
    },
}

impl CachePolicy {
    /// Creates a persistent policy.
    #[must_use]
    pub fn persistent(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self::Persistent {
            path: path.into(),
            ttl,
        }
    }

    /// Opens the cache store this policy describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch file for a disabled cache cannot be
    /// created.
    pub fn open(&self) -> Result<CacheStore, CacheError> {
        match self {
            Self::Disabled => CacheStore::disabled(),
            Self::Persistent { path, ttl } => Ok(CacheStore::persistent(path.clone(), *ttl)),
        }
    }
}

/// Configuration for a [`crate::BestChange`] client.
#[derive(Debug, Clone, Default)]
pub struct BestChangeConfig {
    /// Cache policy.
    pub cache: CachePolicy,
    /// HTTP client settings.
    pub client: ClientConfig,
}

impl BestChangeConfig {
    /// Creates a configuration with caching disabled and default HTTP settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches the bundle at `path` for `ttl`.
    #[must_use]
    pub fn with_cache(mut self, path: impl Into<PathBuf>, ttl: Duration) -> Self {
        self.cache = CachePolicy::persistent(path, ttl);
        self
    }

    /// Disables caching.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.cache = CachePolicy::Disabled;
        self
    }

    /// Sets the fetch timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client.timeout = timeout;
        self
    }

    /// Sets the bundle URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.client.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestchange_fetch::BUNDLE_URL;

    #[test]
    fn test_config_defaults() {
        let config = BestChangeConfig::new();
        assert_eq!(config.cache, CachePolicy::Disabled);
        assert_eq!(config.client.url, BUNDLE_URL);
        assert_eq!(config.client.timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_config_builders() {
        let config = BestChangeConfig::new()
            .with_cache("/tmp/info.zip", Duration::from_secs(60))
            .with_timeout(Duration::from_secs(5))
            .with_url("http://mirror.example/info.zip");

        assert_eq!(
            config.cache,
            CachePolicy::persistent("/tmp/info.zip", Duration::from_secs(60))
        );
        assert_eq!(config.client.timeout, Duration::from_secs(5));
        assert_eq!(config.client.url, "http://mirror.example/info.zip");

        let config = config.without_cache();
        assert_eq!(config.cache, CachePolicy::Disabled);
    }

    #[test]
    fn test_policy_open() {
        let store = CachePolicy::persistent("cache/info.zip", DEFAULT_CACHE_TTL)
            .open()
            .unwrap();
        assert!(store.is_enabled());
        assert_eq!(store.ttl(), Some(DEFAULT_CACHE_TTL));

        let store = CachePolicy::Disabled.open().unwrap();
        assert!(!store.is_enabled());
    }
}
