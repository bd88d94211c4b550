pub mod confidence;
pub mod edge;
pub mod history;
pub mod node;
pub mod vocab;

pub use confidence::Confidence;
pub use edge::{EdgeType, KnowledgeEdge};
pub use history::{ChangeType, HistoryEntry};
pub use node::{
    BeliefContent, BeliefDraft, BeliefPatch, FactContent, FactDraft, InsightContent, InsightDraft,
    KnowledgeNode, LinkedEntity, ManualBeliefDraft, NodeBody, NodeDraft, NodeType,
};
pub use vocab::{BeliefDomain, ConsultantStatus, InsightType, SourceType};
