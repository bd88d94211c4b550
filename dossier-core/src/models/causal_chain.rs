use serde::{Deserialize, Serialize};

use crate::graph::KnowledgeNode;

/// One evidence link in a causal chain: the linked node plus the edge's
/// strength and rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalLink {
    pub node: KnowledgeNode,
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// One-hop neighborhood of a belief: what supports it, what contradicts it,
/// and what it leads to. Intentionally not transitive so results stay
/// bounded and explainable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalChain {
    pub belief_id: String,
    pub supports: Vec<CausalLink>,
    pub contradicts: Vec<CausalLink>,
    pub implications: Vec<CausalLink>,
}

impl CausalChain {
    pub fn is_empty(&self) -> bool {
        self.supports.is_empty() && self.contradicts.is_empty() && self.implications.is_empty()
    }
}
