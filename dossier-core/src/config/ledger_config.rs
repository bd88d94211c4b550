use serde::{Deserialize, Serialize};

use super::defaults;

/// History-ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Similarity ratio in [0,1] above which a content change with unchanged
    /// confidence is classified as `content_refined` instead of
    /// `content_changed`.
    pub refinement_ratio: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            refinement_ratio: defaults::DEFAULT_REFINEMENT_RATIO,
        }
    }
}
