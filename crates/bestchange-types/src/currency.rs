//! Currency records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Currencies keyed by id.
pub type Currencies = BTreeMap<u32, Currency>;

/// A currency listed in the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Aggregator-assigned identifier.
    pub id: u32,
    /// Display name (e.g., "Bitcoin (BTC)").
    pub name: String,
}

impl Currency {
    /// Creates a new currency.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
