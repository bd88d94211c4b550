//! Longest-path-from-source layering over the edge set treated as a DAG.
//! Edges whose insertion would close a cycle (e.g. mutual `related_to`
//! pairs) are left unranked: they do not constrain layer assignment but
//! still render.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::Dfs;
use petgraph::Direction;

use crate::filter::Subset;

pub struct Ranked {
    /// Node ids in subset order.
    pub node_ids: Vec<String>,
    /// Rank per node id.
    pub ranks: HashMap<String, usize>,
    /// Edges that made it into the DAG, as (from, to) id pairs. Ordering
    /// heuristics use these; cycle-excluded edges are invisible to them.
    pub dag_edges: Vec<(String, String)>,
}

/// Assign a rank to every node in the subset.
pub fn assign(subset: &Subset<'_>) -> Ranked {
    let mut graph: StableDiGraph<String, ()> = StableDiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    // Subset order is already deterministic (created_at, id).
    for node in &subset.nodes {
        let idx = graph.add_node(node.id.clone());
        indices.insert(node.id.as_str(), idx);
    }

    let mut dag_edges = Vec::new();
    for edge in &subset.edges {
        let (Some(&from), Some(&to)) = (
            indices.get(edge.from_node_id.as_str()),
            indices.get(edge.to_node_id.as_str()),
        ) else {
            continue;
        };
        if from == to || has_path(&graph, to, from) {
            continue;
        }
        graph.add_edge(from, to, ());
        dag_edges.push((edge.from_node_id.clone(), edge.to_node_id.clone()));
    }

    // Cycles were excluded above, so toposort cannot fail; the fallback
    // leaves everything at rank 0.
    let order = toposort(&graph, None).unwrap_or_default();

    let mut ranks: HashMap<String, usize> = HashMap::new();
    for idx in order {
        let rank = graph
            .neighbors_directed(idx, Direction::Incoming)
            .filter_map(|pred| ranks.get(&graph[pred]).copied())
            .map(|r| r + 1)
            .max()
            .unwrap_or(0);
        ranks.insert(graph[idx].clone(), rank);
    }
    for node in &subset.nodes {
        ranks.entry(node.id.clone()).or_insert(0);
    }

    Ranked {
        node_ids: subset.nodes.iter().map(|n| n.id.clone()).collect(),
        ranks,
        dag_edges,
    }
}

/// DFS-based reachability check: can we reach `to` from `from`?
fn has_path(graph: &StableDiGraph<String, ()>, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}
