use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The 6 semantic relations between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    Supports,
    Contradicts,
    LeadsTo,
    CausedBy,
    Supersedes,
    RelatedTo,
}

impl EdgeType {
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [EdgeType; 6] = [
        Self::Supports,
        Self::Contradicts,
        Self::LeadsTo,
        Self::CausedBy,
        Self::Supersedes,
        Self::RelatedTo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supports => "supports",
            Self::Contradicts => "contradicts",
            Self::LeadsTo => "leads_to",
            Self::CausedBy => "caused_by",
            Self::Supersedes => "supersedes",
            Self::RelatedTo => "related_to",
        }
    }
}

/// A directed, typed edge between two nodes of the same project.
/// Edges are not versioned; an edge whose meaning changes is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEdge {
    pub id: String,
    pub project_id: String,
    pub from_node_id: String,
    pub to_node_id: String,
    pub edge_type: EdgeType,
    /// Strength of the relation, 0.0–1.0.
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PartialEq for KnowledgeEdge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
