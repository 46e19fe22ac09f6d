//! Cached BestChange rates bundle client.
//!
//! This is a facade crate that runs the load pipeline and re-exports the
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use bestchange_lib::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = BestChange::new(Some("info.zip".into()), Duration::from_secs(3600)).await?;
//!
//!     println!("bundle version: {:?}", client.version());
//!     if let Some(rate) = client.rate(93, 10, 5) {
//!         println!("{} -> {}: {}", rate.from_currency_id, rate.to_currency_id, rate.rate);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bestchange/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod pipeline;

pub use client::BestChange;
pub use config::{BestChangeConfig, CachePolicy, DEFAULT_CACHE_TTL};
pub use pipeline::{Pipeline, parse_bundle, validate_bundle};

// Re-export core types
pub use bestchange_types::*;

// Re-export I/O building blocks
pub use bestchange_fetch::{
    ArchiveError, BUNDLE_URL, BundleArchive, BundleSource, CacheError, CacheStore, ClientConfig,
    DownloadClient, DownloadError, members,
};

// Re-export parsers
pub use bestchange_parse::{DateError, Parsed, RowError, decode_cp1251, parse_members};

/// Prelude module for convenient imports.
///
/// ```
/// use bestchange_lib::prelude::*;
/// ```
pub mod prelude {
    pub use bestchange_types::{
        BestChangeError, Currency, Dataset, Exchanger, LookupKind, Metadata, ParseReport,
        PipelineState, Rate, Record, Result,
    };

    pub use bestchange_fetch::{BundleSource, ClientConfig, DownloadClient};

    pub use crate::{BestChange, BestChangeConfig, CachePolicy};
}
