//! Shared builders for integration tests: a project store wrapper with
//! one-line node/edge creation.

use std::sync::Arc;

use dossier_core::config::LedgerConfig;
use dossier_core::graph::{
    BeliefDomain, BeliefDraft, EdgeType, FactDraft, InsightDraft, InsightType, KnowledgeEdge,
    KnowledgeNode, NodeDraft, SourceType,
};
use dossier_store::ProjectStore;

pub struct GraphFixture {
    pub store: Arc<ProjectStore>,
}

impl GraphFixture {
    pub fn new(project_id: &str) -> Self {
        Self {
            store: Arc::new(ProjectStore::new(project_id, LedgerConfig::default())),
        }
    }

    pub fn fact(&self, content: &str) -> KnowledgeNode {
        self.store
            .create_node(NodeDraft::Fact(FactDraft {
                content: content.to_string(),
                summary: content.to_string(),
                source_type: SourceType::Document,
                linked_entity: None,
            }))
            .expect("fixture fact")
    }

    pub fn belief(&self, content: &str, confidence: f64) -> KnowledgeNode {
        self.belief_in(content, confidence, BeliefDomain::Technical)
    }

    pub fn belief_in(&self, content: &str, confidence: f64, domain: BeliefDomain) -> KnowledgeNode {
        self.store
            .create_node(NodeDraft::Belief(BeliefDraft {
                content: content.to_string(),
                summary: content.to_string(),
                confidence,
                domain,
            }))
            .expect("fixture belief")
    }

    pub fn insight(&self, content: &str, confidence: f64) -> KnowledgeNode {
        self.store
            .create_node(NodeDraft::Insight(InsightDraft {
                content: content.to_string(),
                summary: content.to_string(),
                confidence,
                insight_type: InsightType::Behavioral,
            }))
            .expect("fixture insight")
    }

    pub fn edge(
        &self,
        from: &KnowledgeNode,
        to: &KnowledgeNode,
        edge_type: EdgeType,
        strength: f64,
    ) -> KnowledgeEdge {
        self.store
            .create_edge(&from.id, &to.id, edge_type, strength, None)
            .expect("fixture edge")
    }

    pub fn edge_with_rationale(
        &self,
        from: &KnowledgeNode,
        to: &KnowledgeNode,
        edge_type: EdgeType,
        strength: f64,
        rationale: &str,
    ) -> KnowledgeEdge {
        self.store
            .create_edge(
                &from.id,
                &to.id,
                edge_type,
                strength,
                Some(rationale.to_string()),
            )
            .expect("fixture edge")
    }
}
