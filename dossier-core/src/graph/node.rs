use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::vocab::{BeliefDomain, ConsultantStatus, InsightType, SourceType};

/// Reference into the surrounding project state (a meeting, a document, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEntity {
    pub entity_type: String,
    pub entity_id: String,
}

/// Immutable, directly-sourced observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactContent {
    pub content: String,
    pub summary: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_entity: Option<LinkedEntity>,
}

/// Mutable, confidence-weighted synthesized claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefContent {
    pub content: String,
    pub summary: String,
    pub confidence: Confidence,
    pub domain: BeliefDomain,
    pub consultant_status: ConsultantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultant_note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Immutable derived observation about patterns across facts/beliefs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightContent {
    pub content: String,
    pub summary: String,
    pub confidence: Confidence,
    pub insight_type: InsightType,
}

/// Per-variant node payload. Serialized as a tagged enum so the variant
/// survives round-trips through the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node_type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum NodeBody {
    Fact(FactContent),
    Belief(BeliefContent),
    Insight(InsightContent),
}

/// Node variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Fact,
    Belief,
    Insight,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [Self::Fact, Self::Belief, Self::Insight];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fact => "fact",
            Self::Belief => "belief",
            Self::Insight => "insight",
        }
    }
}

impl NodeBody {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Fact(_) => NodeType::Fact,
            Self::Belief(_) => NodeType::Belief,
            Self::Insight(_) => NodeType::Insight,
        }
    }

    /// Explicit confidence. Facts are ground truth and carry none.
    pub fn confidence(&self) -> Option<Confidence> {
        match self {
            Self::Fact(_) => None,
            Self::Belief(b) => Some(b.confidence),
            Self::Insight(i) => Some(i.confidence),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Fact(f) => &f.content,
            Self::Belief(b) => &b.content,
            Self::Insight(i) => &i.content,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            Self::Fact(f) => &f.summary,
            Self::Belief(b) => &b.summary,
            Self::Insight(i) => &i.summary,
        }
    }
}

/// A node in the engagement knowledge graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeNode {
    /// UUID v4 identifier, unique within a project.
    pub id: String,
    pub project_id: String,
    #[serde(flatten)]
    pub body: NodeBody,
    /// Soft-removal flag. Deactivated nodes are kept for audit but excluded
    /// from default snapshots and read-side computation.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl KnowledgeNode {
    pub fn node_type(&self) -> NodeType {
        self.body.node_type()
    }

    pub fn confidence(&self) -> Option<Confidence> {
        self.body.confidence()
    }

    pub fn is_belief(&self) -> bool {
        matches!(self.body, NodeBody::Belief(_))
    }

    /// Last mutation time: a belief's `updated_at`, creation time otherwise.
    pub fn updated_at(&self) -> DateTime<Utc> {
        match &self.body {
            NodeBody::Belief(b) => b.updated_at,
            _ => self.created_at,
        }
    }

    pub fn as_belief(&self) -> Option<&BeliefContent> {
        match &self.body {
            NodeBody::Belief(b) => Some(b),
            _ => None,
        }
    }
}

/// Identity equality: two nodes are equal if they have the same ID.
/// For structural comparison, compare bodies directly.
impl PartialEq for KnowledgeNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Input payload for `create_node`, one draft struct per variant.
/// Confidence arrives as a raw f64 so the store can reject out-of-range
/// values instead of clamping them silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node_type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum NodeDraft {
    Fact(FactDraft),
    Belief(BeliefDraft),
    Insight(InsightDraft),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactDraft {
    pub content: String,
    pub summary: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub linked_entity: Option<LinkedEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefDraft {
    pub content: String,
    pub summary: String,
    pub confidence: f64,
    pub domain: BeliefDomain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightDraft {
    pub content: String,
    pub summary: String,
    pub confidence: f64,
    pub insight_type: InsightType,
}

impl NodeDraft {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Fact(_) => NodeType::Fact,
            Self::Belief(_) => NodeType::Belief,
            Self::Insight(_) => NodeType::Insight,
        }
    }

    /// Raw confidence of the draft, if the variant carries one.
    pub fn confidence(&self) -> Option<f64> {
        match self {
            Self::Fact(_) => None,
            Self::Belief(b) => Some(b.confidence),
            Self::Insight(i) => Some(i.confidence),
        }
    }

    /// Materialize a node from a validated draft. The store validates
    /// ranges before calling this.
    pub fn into_node(self, project_id: &str) -> KnowledgeNode {
        let now = Utc::now();
        let body = match self {
            Self::Fact(d) => NodeBody::Fact(FactContent {
                content: d.content,
                summary: d.summary,
                source_type: d.source_type,
                linked_entity: d.linked_entity,
            }),
            Self::Belief(d) => NodeBody::Belief(BeliefContent {
                content: d.content,
                summary: d.summary,
                confidence: Confidence::new(d.confidence),
                domain: d.domain,
                consultant_status: ConsultantStatus::None,
                consultant_note: None,
                updated_at: now,
            }),
            Self::Insight(d) => NodeBody::Insight(InsightContent {
                content: d.content,
                summary: d.summary,
                confidence: Confidence::new(d.confidence),
                insight_type: d.insight_type,
            }),
        };
        KnowledgeNode {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            body,
            active: true,
            created_at: now,
        }
    }
}

/// Manual belief entry as issued by a consultant through the presentation
/// layer: statement text plus a 0–100 integer confidence percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualBeliefDraft {
    pub statement: String,
    #[serde(default)]
    pub domain: Option<BeliefDomain>,
    pub confidence_percent: u8,
}

/// Partial update for `update_belief`. Only set fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeliefPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub domain: Option<BeliefDomain>,
    /// Recorded verbatim on the history entry when the patch changes
    /// confidence or content.
    #[serde(default)]
    pub change_reason: Option<String>,
    /// The fact/belief whose arrival caused this change.
    #[serde(default)]
    pub triggered_by_node_id: Option<String>,
}
