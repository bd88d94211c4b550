use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::graph::{EdgeType, KnowledgeEdge, KnowledgeNode, NodeType};

/// Aggregate counts over one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub fact_count: usize,
    pub belief_count: usize,
    pub insight_count: usize,
    /// Histogram of edge types present in the snapshot.
    pub edge_counts: BTreeMap<EdgeType, usize>,
    /// Mean confidence over beliefs in the snapshot (0.0 when empty).
    pub mean_belief_confidence: f64,
}

impl GraphStats {
    pub fn node_count(&self) -> usize {
        self.fact_count + self.belief_count + self.insight_count
    }

    pub fn count_for(&self, node_type: NodeType) -> usize {
        match node_type {
            NodeType::Fact => self.fact_count,
            NodeType::Belief => self.belief_count,
            NodeType::Insight => self.insight_count,
        }
    }
}

/// Full materialized graph state for a project at a point in time.
/// This is what the resolver, layout engine, and synthesizer consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub project_id: String,
    /// Monotonically increasing mutation counter; bumped on every committed
    /// write. Synthesis staleness and caching key on this.
    pub version: u64,
    pub taken_at: DateTime<Utc>,
    /// Wall-clock time of the last committed mutation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mutated_at: Option<DateTime<Utc>>,
    pub nodes: Vec<KnowledgeNode>,
    pub edges: Vec<KnowledgeEdge>,
    pub stats: GraphStats,
}

impl GraphSnapshot {
    pub fn node(&self, id: &str) -> Option<&KnowledgeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
