//! Character-based token estimation. 1 token ≈ N characters (default 4),
//! an approximation rather than a tokenizer. Downstream consumers that need
//! byte-exact budgets can swap in a real tokenizer without touching the
//! section-ordering contract.

#[derive(Debug, Clone, Copy)]
pub struct TokenEstimator {
    chars_per_token: usize,
}

impl TokenEstimator {
    pub fn new(chars_per_token: usize) -> Self {
        Self {
            chars_per_token: chars_per_token.max(1),
        }
    }

    /// Estimated token count for a text: character count divided by the
    /// chars-per-token ratio.
    pub fn estimate(&self, text: &str) -> usize {
        self.estimate_chars(text.chars().count())
    }

    pub fn estimate_chars(&self, chars: usize) -> usize {
        chars / self.chars_per_token
    }

    /// Character allowance corresponding to a token budget.
    pub fn budget_chars(&self, token_budget: usize) -> usize {
        token_budget * self.chars_per_token
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new(dossier_core::config::defaults::DEFAULT_CHARS_PER_TOKEN)
    }
}
