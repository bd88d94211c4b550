use serde::{Deserialize, Serialize};

use crate::graph::{ConsultantStatus, KnowledgeEdge, KnowledgeNode, NodeType};

/// Predicates selecting the node subset handed to the layout engine.
/// `None` means no restriction on that axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutFilter {
    #[serde(default)]
    pub node_types: Option<Vec<NodeType>>,
    /// Applies to beliefs only; facts and insights carry no status and
    /// always pass this predicate.
    #[serde(default)]
    pub statuses: Option<Vec<ConsultantStatus>>,
}

impl LayoutFilter {
    pub fn matches(&self, node: &KnowledgeNode) -> bool {
        if let Some(types) = &self.node_types {
            if !types.contains(&node.node_type()) {
                return false;
            }
        }
        if let Some(statuses) = &self.statuses {
            if let Some(belief) = node.as_belief() {
                if !statuses.contains(&belief.consultant_status) {
                    return false;
                }
            }
        }
        true
    }
}

/// Computed 2-D position for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub node_id: String,
    pub x: f64,
    pub y: f64,
    /// Layer assigned by longest-path ranking.
    pub rank: usize,
}

/// Layout result: positions plus the edge subset that was laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLayout {
    pub positions: Vec<NodePosition>,
    pub edges: Vec<KnowledgeEdge>,
}

impl GraphLayout {
    pub fn position(&self, node_id: &str) -> Option<&NodePosition> {
        self.positions.iter().find(|p| p.node_id == node_id)
    }
}
