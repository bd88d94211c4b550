//! Filter application and structural sanity checks.

use std::collections::HashSet;

use dossier_core::errors::{ConsistencyFault, DossierResult};
use dossier_core::models::{GraphSnapshot, LayoutFilter};
use dossier_core::{KnowledgeEdge, KnowledgeNode};

/// The filtered node/edge subset handed to ranking. Nodes keep snapshot
/// order (created_at, id), which seeds the deterministic initial ordering.
pub struct Subset<'a> {
    pub nodes: Vec<&'a KnowledgeNode>,
    pub edges: Vec<&'a KnowledgeEdge>,
}

/// Select nodes matching the filter and edges with both endpoints selected.
/// An edge referencing a node absent from the snapshot altogether is a
/// consistency fault, not a filter miss.
pub fn apply<'a>(
    snapshot: &'a GraphSnapshot,
    filter: &LayoutFilter,
) -> DossierResult<Subset<'a>> {
    let all_ids: HashSet<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();

    let nodes: Vec<&KnowledgeNode> = snapshot
        .nodes
        .iter()
        .filter(|n| filter.matches(n))
        .collect();
    let selected: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let mut edges = Vec::new();
    for edge in &snapshot.edges {
        for endpoint in [&edge.from_node_id, &edge.to_node_id] {
            if !all_ids.contains(endpoint.as_str()) {
                return Err(ConsistencyFault {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                }
                .into());
            }
        }
        if selected.contains(edge.from_node_id.as_str())
            && selected.contains(edge.to_node_id.as_str())
        {
            edges.push(edge);
        }
    }

    Ok(Subset { nodes, edges })
}
