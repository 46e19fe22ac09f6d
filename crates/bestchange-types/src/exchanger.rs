//! Exchanger records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exchangers keyed by id, iterated in ascending id order.
pub type Exchangers = BTreeMap<u32, Exchanger>;

/// An exchange service listed in the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exchanger {
    /// Aggregator-assigned identifier.
    pub id: u32,
    /// Exchanger name.
    pub name: String,
}

impl Exchanger {
    /// Creates a new exchanger.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Exchanger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
