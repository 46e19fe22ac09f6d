//! Pipeline lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single bundle load.
///
/// ```text
/// Idle ──stale──▶ Fetching ──▶ Parsing ──▶ Ready
///   └────fresh────────────────▲
/// any state ──error──▶ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    /// Constructed, nothing done yet.
    #[default]
    Idle,
    /// Downloading the bundle into the cache.
    Fetching,
    /// Opening the cached archive and parsing its members.
    Parsing,
    /// Dataset fully populated.
    Ready,
    /// A fatal error stopped the load.
    Failed,
}

impl PipelineState {
    /// Returns true if no further transitions are possible.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }

    /// Returns the state as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Parsing => "parsing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_state_is_finished() {
        assert!(!PipelineState::Idle.is_finished());
        assert!(!PipelineState::Fetching.is_finished());
        assert!(!PipelineState::Parsing.is_finished());
        assert!(PipelineState::Ready.is_finished());
        assert!(PipelineState::Failed.is_finished());
    }

    #[test]
    fn test_pipeline_state_default() {
        assert_eq!(PipelineState::default(), PipelineState::Idle);
    }
}
