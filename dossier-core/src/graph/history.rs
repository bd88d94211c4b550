use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// How a belief changed in one ledger transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    ConfidenceIncrease,
    ConfidenceDecrease,
    ContentRefined,
    ContentChanged,
    Superseded,
    Archived,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConfidenceIncrease => "confidence_increase",
            Self::ConfidenceDecrease => "confidence_decrease",
            Self::ContentRefined => "content_refined",
            Self::ContentChanged => "content_changed",
            Self::Superseded => "superseded",
            Self::Archived => "archived",
        }
    }
}

/// One confidence/content transition of a belief. Created exactly once per
/// mutation, never edited or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub belief_id: String,
    pub previous_confidence: Confidence,
    pub new_confidence: Confidence,
    pub previous_content: String,
    pub new_content: String,
    pub change_type: ChangeType,
    pub change_reason: String,
    /// The fact/belief whose arrival caused this change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by_node_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
