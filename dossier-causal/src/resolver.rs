//! One-hop causal resolution and top-belief selection.

use std::cmp::Ordering;

use tracing::debug;

use dossier_core::errors::{ConsistencyFault, DossierResult, GraphError};
use dossier_core::models::{CausalChain, CausalLink, GraphSnapshot};
use dossier_core::{EdgeType, KnowledgeEdge, KnowledgeNode};

use crate::adjacency::Adjacency;

/// Resolve the causal chain of one belief:
/// supports = `X --supports--> belief`, contradicts = `X --contradicts-->
/// belief`, implications = `belief --leads_to--> Y`.
///
/// A belief with no such edges yields empty sets, never an error. An edge
/// naming a node missing from the snapshot is a `ConsistencyFault`: the
/// persistence collaborator broke the store's invariants.
pub fn resolve(snapshot: &GraphSnapshot, belief_id: &str) -> DossierResult<CausalChain> {
    let adjacency = Adjacency::build(snapshot);
    let belief = adjacency
        .node(belief_id)
        .ok_or_else(|| GraphError::NotFound {
            id: belief_id.to_string(),
        })?;
    if !belief.is_belief() {
        return Err(GraphError::WrongVariant {
            id: belief_id.to_string(),
            expected: "belief",
            actual: belief.node_type().as_str(),
        }
        .into());
    }

    let mut supports = Vec::new();
    let mut contradicts = Vec::new();
    for edge in adjacency.incoming(belief_id) {
        let bucket = match edge.edge_type {
            EdgeType::Supports => &mut supports,
            EdgeType::Contradicts => &mut contradicts,
            _ => continue,
        };
        bucket.push(link_for(&adjacency, edge, &edge.from_node_id)?);
    }

    let mut implications = Vec::new();
    for edge in adjacency.outgoing(belief_id) {
        if edge.edge_type == EdgeType::LeadsTo {
            implications.push(link_for(&adjacency, edge, &edge.to_node_id)?);
        }
    }

    sort_links(&mut supports);
    sort_links(&mut contradicts);
    sort_links(&mut implications);

    debug!(
        belief_id = %belief_id,
        supports = supports.len(),
        contradicts = contradicts.len(),
        implications = implications.len(),
        "causal chain resolved"
    );
    Ok(CausalChain {
        belief_id: belief_id.to_string(),
        supports,
        contradicts,
        implications,
    })
}

/// Beliefs for batch display: confidence descending, capped, ties broken by
/// most recent update first, then id for full determinism.
pub fn top_beliefs(snapshot: &GraphSnapshot, limit: usize) -> Vec<KnowledgeNode> {
    let mut beliefs: Vec<&KnowledgeNode> =
        snapshot.nodes.iter().filter(|n| n.is_belief()).collect();
    beliefs.sort_by(|a, b| {
        let ca = a.confidence().map(f64::from).unwrap_or(0.0);
        let cb = b.confidence().map(f64::from).unwrap_or(0.0);
        cb.partial_cmp(&ca)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.updated_at().cmp(&a.updated_at()))
            .then_with(|| a.id.cmp(&b.id))
    });
    beliefs.into_iter().take(limit).cloned().collect()
}

fn link_for(
    adjacency: &Adjacency<'_>,
    edge: &KnowledgeEdge,
    node_id: &str,
) -> DossierResult<CausalLink> {
    let node = adjacency.node(node_id).ok_or_else(|| ConsistencyFault {
        edge_id: edge.id.clone(),
        node_id: node_id.to_string(),
    })?;
    Ok(CausalLink {
        node: node.clone(),
        strength: edge.strength,
        rationale: edge.rationale.clone(),
    })
}

/// Stable ordering: strength descending, ties by node creation time
/// ascending, then node id.
fn sort_links(links: &mut [CausalLink]) {
    links.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.node.created_at.cmp(&b.node.created_at))
            .then_with(|| a.node.id.cmp(&b.node.id))
    });
}
