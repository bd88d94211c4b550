//! Id-indexed adjacency built on demand from a snapshot's edge set.
//! Edges are plain directed records keyed by id; no pointer-linked nodes,
//! so mutual `related_to` pairs cannot form reference cycles.

use std::collections::HashMap;

use dossier_core::models::GraphSnapshot;
use dossier_core::{KnowledgeEdge, KnowledgeNode};

pub struct Adjacency<'a> {
    nodes: HashMap<&'a str, &'a KnowledgeNode>,
    incoming: HashMap<&'a str, Vec<&'a KnowledgeEdge>>,
    outgoing: HashMap<&'a str, Vec<&'a KnowledgeEdge>>,
}

impl<'a> Adjacency<'a> {
    pub fn build(snapshot: &'a GraphSnapshot) -> Self {
        let mut nodes = HashMap::with_capacity(snapshot.nodes.len());
        for node in &snapshot.nodes {
            nodes.insert(node.id.as_str(), node);
        }

        let mut incoming: HashMap<&str, Vec<&KnowledgeEdge>> = HashMap::new();
        let mut outgoing: HashMap<&str, Vec<&KnowledgeEdge>> = HashMap::new();
        for edge in &snapshot.edges {
            outgoing
                .entry(edge.from_node_id.as_str())
                .or_default()
                .push(edge);
            incoming
                .entry(edge.to_node_id.as_str())
                .or_default()
                .push(edge);
        }

        Self {
            nodes,
            incoming,
            outgoing,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a KnowledgeNode> {
        self.nodes.get(id).copied()
    }

    pub fn incoming(&self, id: &str) -> &[&'a KnowledgeEdge] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn outgoing(&self, id: &str) -> &[&'a KnowledgeEdge] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
