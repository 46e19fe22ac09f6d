//! Record parsers for the bestchange rates bundle.
//!
//! Every member of the bundle is `;`-delimited Windows-1251 text. Bytes are
//! decoded once at this boundary and never leave the crate in the legacy
//! encoding.
//!
//! - [`decode_cp1251`] - Legacy encoding to UTF-8
//! - [`parse_currencies`], [`parse_exchangers`], [`parse_rates`] - Record tables
//! - [`parse_metadata`] - Version and last-update descriptor
//! - [`parse_last_update`] - Russian month names to a timestamp
//! - [`parse_members`] - All four members into a [`bestchange_types::Dataset`]
//!
//! Malformed rows are skipped and counted, never fatal.

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bestchange/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bundle;
mod currency;
mod error;
mod exchanger;
mod info;
mod month;
mod rate;
mod text;

pub use bundle::parse_members;
pub use currency::{parse_currencies, parse_currency_line};
pub use error::{DateError, RowError};
pub use exchanger::{parse_exchanger_line, parse_exchangers};
pub use info::parse_metadata;
pub use month::{parse_last_update, translate_months};
pub use rate::{parse_rate_line, parse_rates};
pub use text::{Parsed, decode_cp1251};
