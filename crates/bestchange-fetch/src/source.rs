//! Transport seam between the pipeline and the network.

use async_trait::async_trait;
use bytes::Bytes;

use crate::{DownloadClient, DownloadError};

/// Something that can produce the raw bundle bytes.
///
/// The pipeline only talks to the network through this trait, so a
/// [`DownloadClient`] can be swapped for an in-memory source in tests or for
/// a mirror in deployments that cannot reach the aggregator directly.
#[async_trait]
pub trait BundleSource: Send + Sync {
    /// Fetches the complete bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle could not be retrieved or was empty.
    async fn fetch(&self) -> Result<Bytes, DownloadError>;

    /// Describes where the bundle comes from, for logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl BundleSource for DownloadClient {
    async fn fetch(&self) -> Result<Bytes, DownloadError> {
        self.download().await
    }

    fn describe(&self) -> String {
        self.config().url.clone()
    }
}
