//! HTTP client for downloading the rates bundle.

use bytes::Bytes;
use reqwest::{Client, redirect};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Location of the public BestChange bundle.
pub const BUNDLE_URL: &str = "http://api.bestchange.ru/info.zip";

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Configuration for the download client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bundle URL.
    pub url: String,
    /// Upper bound on the whole request, redirects and body included.
    pub timeout: Duration,
    /// Upper bound on establishing a connection.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: BUNDLE_URL.to_string(),
            timeout: Duration::from_secs(25),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("bestchange/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request failed, including timeouts and connection errors.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Server answered with an empty body.
    #[error("Server returned no data")]
    EmptyBody,
}

impl DownloadError {
    /// Returns true if the request hit the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// HTTP client that fetches the bundle in a single GET.
#[derive(Debug, Clone)]
pub struct DownloadClient {
    client: Client,
    config: ClientConfig,
}

impl DownloadClient {
    /// Creates a new download client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout.min(config.timeout))
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the bundle from the configured URL.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, non-2xx status, or an
    /// empty body.
    pub async fn download(&self) -> Result<Bytes, DownloadError> {
        self.download_url(&self.config.url).await
    }

    /// Downloads the body at `url`, following redirects.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, non-2xx status, or an
    /// empty body.
    pub async fn download_url(&self, url: &str) -> Result<Bytes, DownloadError> {
        debug!(%url, timeout = ?self.config.timeout, "requesting bundle");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(DownloadError::EmptyBody);
        }

        info!(%url, bytes = body.len(), "bundle downloaded");
        Ok(body)
    }
}
