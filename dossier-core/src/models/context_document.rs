use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-section budget usage, for the caller to display a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionUsage {
    pub title: String,
    pub entry_count: usize,
    pub chars_used: usize,
    /// `chars_used` divided by the configured chars-per-token.
    pub token_estimate: usize,
}

/// Token-budgeted digest of a project graph, consumed as an opaque text
/// block by the downstream reasoning process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextDocument {
    pub project_id: String,
    pub text: String,
    pub sections: Vec<SectionUsage>,
    pub token_estimate: usize,
    pub token_budget: usize,
    pub synthesized_at: DateTime<Utc>,
    /// Snapshot version this document was built from.
    pub graph_version: u64,
    /// Set when graph mutations or the staleness interval have outrun this
    /// document since it was synthesized.
    pub stale: bool,
    /// blake3 hex digest of `text`, for cheap idempotence checks.
    pub fingerprint: String,
}
