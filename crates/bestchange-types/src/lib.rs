//! Core types for the bestchange rates client.
//!
//! This crate provides the data model shared by every stage of the pipeline:
//!
//! - [`Currency`] - A currency listed by the aggregator
//! - [`Exchanger`] - An exchange service listed by the aggregator
//! - [`Rate`] - A quoted rate between two currencies at one exchanger
//! - [`Metadata`] - Bundle version and last-update timestamp
//! - [`Dataset`] - The fully parsed bundle with lookup helpers
//! - [`PipelineState`] - Lifecycle of a single load
//! - [`BestChangeError`] - Fatal pipeline failures

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bestchange/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod currency;
mod dataset;
mod error;
mod exchanger;
mod metadata;
mod rate;
mod state;

pub use currency::{Currencies, Currency};
pub use dataset::{Dataset, LookupKind, LookupKindParseError, ParseReport, ParseStats, Record};
pub use error::{BestChangeError, Result};
pub use exchanger::{Exchanger, Exchangers};
pub use metadata::Metadata;
pub use rate::{Rate, RateTable, RatesFrom, is_positive_amount};
pub use state::PipelineState;
