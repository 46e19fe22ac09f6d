//! CLI command implementations.

pub(crate) mod currencies;
pub(crate) mod exchangers;
pub(crate) mod info;
pub(crate) mod lookup;
pub(crate) mod rates;

use anyhow::{Context, Result};
use bestchange_lib::prelude::*;
use tracing::debug;

/// Loads the bundle every command reads from.
pub(crate) async fn load(config: BestChangeConfig) -> Result<BestChange> {
    let url = config.client.url.clone();
    debug!(cache = ?config.cache, %url, timeout = ?config.client.timeout, "loading bundle");
    BestChange::with_config(config)
        .await
        .with_context(|| format!("Failed to load bundle from {url}"))
}
