//! Bundle metadata.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Descriptor values read from the bundle's info member.
///
/// Both fields are informational. A bundle with an unreadable timestamp is
/// still usable, so either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Bundle format version, verbatim.
    pub version: Option<String>,
    /// Time the aggregator last refreshed the bundle (aggregator local time).
    pub last_update: Option<NaiveDateTime>,
}
