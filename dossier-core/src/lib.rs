//! # dossier-core
//!
//! Foundation crate for the dossier engagement-knowledge engine.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::DossierConfig;
pub use errors::{DossierError, DossierResult};
pub use graph::{
    BeliefDomain, ChangeType, Confidence, ConsultantStatus, EdgeType, HistoryEntry, InsightType,
    KnowledgeEdge, KnowledgeNode, NodeBody, NodeType, SourceType,
};
pub use models::GraphSnapshot;
