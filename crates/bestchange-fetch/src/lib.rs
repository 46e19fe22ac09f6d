//! Bundle download, cache store and archive access for the bestchange rates client.
//!
//! This crate provides the I/O half of the pipeline:
//!
//! - [`DownloadClient`] - HTTP client that retrieves the bundle with a bounded timeout
//! - [`BundleSource`] - Transport seam the pipeline fetches through
//! - [`CacheStore`] - Filesystem cache with mtime freshness and atomic replace
//! - [`BundleArchive`] - In-memory ZIP reader with named-member lookup

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bestchange/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod archive;
mod cache;
mod client;
mod source;

pub use archive::{ArchiveError, BundleArchive, members};
pub use cache::{CacheError, CacheStore, is_fresh, is_fresh_at};
pub use client::{BUNDLE_URL, ClientConfig, DownloadClient, DownloadError};
pub use source::BundleSource;
