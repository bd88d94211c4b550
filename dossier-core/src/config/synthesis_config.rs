use serde::{Deserialize, Serialize};

use super::defaults;

/// Context-synthesizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Token budget for one synthesized document.
    pub token_budget: usize,
    /// Characters per token. The chars/N heuristic stands in for a real
    /// tokenizer; swapping one in must not change section ordering.
    pub chars_per_token: usize,
    /// Seconds after which a document is stale even without graph mutations.
    pub staleness_interval_secs: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            token_budget: defaults::DEFAULT_TOKEN_BUDGET,
            chars_per_token: defaults::DEFAULT_CHARS_PER_TOKEN,
            staleness_interval_secs: defaults::DEFAULT_STALENESS_INTERVAL_SECS,
        }
    }
}
