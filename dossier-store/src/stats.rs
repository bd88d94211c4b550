//! Snapshot aggregates: per-type node counts, edge-type histogram, mean
//! belief confidence.

use std::collections::BTreeMap;

use dossier_core::graph::{KnowledgeEdge, KnowledgeNode, NodeType};
use dossier_core::models::GraphStats;

pub fn compute(nodes: &[KnowledgeNode], edges: &[KnowledgeEdge]) -> GraphStats {
    let mut stats = GraphStats {
        edge_counts: BTreeMap::new(),
        ..GraphStats::default()
    };

    let mut confidence_sum = 0.0;
    for node in nodes {
        match node.node_type() {
            NodeType::Fact => stats.fact_count += 1,
            NodeType::Belief => {
                stats.belief_count += 1;
                if let Some(c) = node.confidence() {
                    confidence_sum += c.value();
                }
            }
            NodeType::Insight => stats.insight_count += 1,
        }
    }

    for edge in edges {
        *stats.edge_counts.entry(edge.edge_type).or_insert(0) += 1;
    }

    if stats.belief_count > 0 {
        stats.mean_belief_confidence = confidence_sum / stats.belief_count as f64;
    }

    stats
}
