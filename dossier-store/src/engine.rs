//! ProjectStore owns the canonical graph state for one project behind a
//! single RwLock. All five mutation paths take the write lock, which is what
//! makes a belief write and its ledger entry atomic to readers.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use dossier_core::config::LedgerConfig;
use dossier_core::constants::{MAX_CONFIDENCE_PERCENT, MIN_STATEMENT_CHARS};
use dossier_core::errors::{DossierResult, GraphError};
use dossier_core::graph::{
    BeliefDomain, BeliefDraft, BeliefPatch, ChangeType, Confidence, ConsultantStatus, EdgeType,
    HistoryEntry, KnowledgeEdge, KnowledgeNode, ManualBeliefDraft, NodeBody, NodeDraft,
};
use dossier_core::models::GraphSnapshot;

use crate::{ledger, stats};

#[derive(Debug, Default)]
struct GraphState {
    nodes: HashMap<String, KnowledgeNode>,
    edges: HashMap<String, KnowledgeEdge>,
    /// Append-only per-belief ledger, ascending by insertion time.
    history: HashMap<String, Vec<HistoryEntry>>,
    /// Bumped on every committed mutation.
    version: u64,
    last_mutated_at: Option<DateTime<Utc>>,
}

impl GraphState {
    fn bump(&mut self) {
        self.version += 1;
        self.last_mutated_at = Some(Utc::now());
    }
}

/// A status transition requested by the review layer. The legality table
/// lives in `dossier-review`; the store only enforces it atomically.
#[derive(Debug, Clone)]
pub struct ReviewTransition {
    pub target: ConsultantStatus,
    pub allowed_from: Vec<ConsultantStatus>,
    pub note: Option<String>,
    pub change_reason: Option<String>,
}

/// Canonical node/edge owner for one project.
pub struct ProjectStore {
    project_id: String,
    config: LedgerConfig,
    state: RwLock<GraphState>,
}

impl ProjectStore {
    pub fn new(project_id: impl Into<String>, config: LedgerConfig) -> Self {
        Self {
            project_id: project_id.into(),
            config,
            state: RwLock::new(GraphState::default()),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    // A poisoned lock means a writer panicked mid-mutation; the state is
    // still structurally valid (mutations build values before touching it),
    // so recover the guard rather than propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, GraphState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Validate and insert a new node. All-or-nothing: a draft that fails
    /// validation leaves no trace.
    pub fn create_node(&self, draft: NodeDraft) -> DossierResult<KnowledgeNode> {
        if let Some(confidence) = draft.confidence() {
            validate_confidence(confidence)?;
        }
        let node = draft.into_node(&self.project_id);

        let mut guard = self.write();
        guard.nodes.insert(node.id.clone(), node.clone());
        guard.bump();
        debug!(
            node_id = %node.id,
            node_type = node.node_type().as_str(),
            "node created"
        );
        Ok(node)
    }

    /// Manual belief entry: statement text plus a 0–100 integer confidence
    /// percentage. The percentage path exists only here; programmatic
    /// producers pass the float directly and lose nothing to rounding.
    pub fn create_manual_belief(&self, draft: ManualBeliefDraft) -> DossierResult<KnowledgeNode> {
        let statement = draft.statement.trim();
        if statement.chars().count() < MIN_STATEMENT_CHARS {
            return Err(GraphError::ValidationError {
                reason: format!("statement must be at least {MIN_STATEMENT_CHARS} characters"),
            }
            .into());
        }
        if draft.confidence_percent > MAX_CONFIDENCE_PERCENT {
            return Err(GraphError::ValidationError {
                reason: format!(
                    "confidence_percent must be 0–{MAX_CONFIDENCE_PERCENT}, got {}",
                    draft.confidence_percent
                ),
            }
            .into());
        }

        self.create_node(NodeDraft::Belief(BeliefDraft {
            content: statement.to_string(),
            summary: statement.to_string(),
            confidence: Confidence::from_percent(draft.confidence_percent).value(),
            domain: draft.domain.unwrap_or(BeliefDomain::Business),
        }))
    }

    /// Create a typed edge between two existing nodes. A `supersedes` edge
    /// landing on a belief also records a `superseded` ledger entry, in the
    /// same critical section.
    pub fn create_edge(
        &self,
        from_node_id: &str,
        to_node_id: &str,
        edge_type: EdgeType,
        strength: f64,
        rationale: Option<String>,
    ) -> DossierResult<KnowledgeEdge> {
        if !(0.0..=1.0).contains(&strength) {
            return Err(GraphError::ValidationError {
                reason: format!("edge strength must be in [0,1], got {strength}"),
            }
            .into());
        }

        let mut guard = self.write();
        let state = &mut *guard;
        for endpoint in [from_node_id, to_node_id] {
            if !state.nodes.contains_key(endpoint) {
                return Err(GraphError::DanglingEdge {
                    project_id: self.project_id.clone(),
                    endpoint: endpoint.to_string(),
                }
                .into());
            }
        }

        let edge = KnowledgeEdge {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: self.project_id.clone(),
            from_node_id: from_node_id.to_string(),
            to_node_id: to_node_id.to_string(),
            edge_type,
            strength,
            rationale: rationale.clone(),
            created_at: Utc::now(),
        };

        if edge_type == EdgeType::Supersedes {
            if let Some(NodeBody::Belief(belief)) = state.nodes.get(to_node_id).map(|n| &n.body) {
                let reason = rationale
                    .unwrap_or_else(|| format!("superseded by {from_node_id}"));
                let entry = ledger::build_entry(
                    to_node_id,
                    belief.confidence,
                    belief.confidence,
                    &belief.content,
                    &belief.content,
                    ChangeType::Superseded,
                    reason,
                    Some(from_node_id.to_string()),
                );
                state.history.entry(to_node_id.to_string()).or_default().push(entry);
            }
        }

        state.edges.insert(edge.id.clone(), edge.clone());
        state.bump();
        debug!(
            edge_id = %edge.id,
            edge_type = edge.edge_type.as_str(),
            "edge created"
        );
        Ok(edge)
    }

    /// Apply a partial update to a belief. When confidence or content
    /// actually changes, exactly one ledger entry is committed with the node
    /// write; a reader can never observe one without the other.
    pub fn update_belief(&self, id: &str, patch: BeliefPatch) -> DossierResult<KnowledgeNode> {
        if let Some(confidence) = patch.confidence {
            validate_confidence(confidence)?;
        }

        let mut guard = self.write();
        let state = &mut *guard;
        let node = state.nodes.get_mut(id).ok_or_else(|| GraphError::NotFound {
            id: id.to_string(),
        })?;
        let belief = match &mut node.body {
            NodeBody::Belief(b) => b,
            other => {
                return Err(GraphError::WrongVariant {
                    id: id.to_string(),
                    expected: "belief",
                    actual: other.node_type().as_str(),
                }
                .into())
            }
        };

        let previous_confidence = belief.confidence;
        let previous_content = belief.content.clone();
        let new_confidence = patch
            .confidence
            .map(Confidence::new)
            .unwrap_or(previous_confidence);
        let new_content = patch
            .content
            .clone()
            .unwrap_or_else(|| previous_content.clone());

        let confidence_changed = new_confidence != previous_confidence;
        let content_changed = new_content != previous_content;
        let domain_changed = patch.domain.is_some_and(|d| d != belief.domain);

        if !confidence_changed && !content_changed && !domain_changed {
            return Ok(node.clone());
        }

        belief.confidence = new_confidence;
        belief.content = new_content.clone();
        if let Some(domain) = patch.domain {
            belief.domain = domain;
        }
        belief.updated_at = Utc::now();
        let updated = node.clone();

        if confidence_changed || content_changed {
            let change_type = ledger::classify(
                previous_confidence,
                new_confidence,
                &previous_content,
                &new_content,
                &self.config,
            );
            let reason = patch
                .change_reason
                .unwrap_or_else(|| "belief updated".to_string());
            let entry = ledger::build_entry(
                id,
                previous_confidence,
                new_confidence,
                &previous_content,
                &new_content,
                change_type,
                reason,
                patch.triggered_by_node_id,
            );
            state.history.entry(id.to_string()).or_default().push(entry);
            debug!(
                belief_id = %id,
                change_type = change_type.as_str(),
                "belief history recorded"
            );
        }

        state.bump();
        Ok(updated)
    }

    /// Soft-removal: the node stays in the full (audit) view but drops out
    /// of default snapshots and read-side computation.
    pub fn deactivate_node(&self, id: &str) -> DossierResult<()> {
        let mut guard = self.write();
        let node = guard.nodes.get_mut(id).ok_or_else(|| GraphError::NotFound {
            id: id.to_string(),
        })?;
        if node.active {
            node.active = false;
            guard.bump();
            debug!(node_id = %id, "node deactivated");
        }
        Ok(())
    }

    /// Atomic consultant-status transition. Idempotent when the belief is
    /// already in the target status (no ledger entry, note untouched).
    /// Landing on `Archived` records an `archived` entry and deactivates
    /// the node, all under one write lock.
    pub fn transition_status(
        &self,
        belief_id: &str,
        transition: ReviewTransition,
    ) -> DossierResult<(KnowledgeNode, bool)> {
        let mut guard = self.write();
        let state = &mut *guard;
        let node = state
            .nodes
            .get_mut(belief_id)
            .ok_or_else(|| GraphError::NotFound {
                id: belief_id.to_string(),
            })?;
        let belief = match &mut node.body {
            NodeBody::Belief(b) => b,
            other => {
                return Err(GraphError::WrongVariant {
                    id: belief_id.to_string(),
                    expected: "belief",
                    actual: other.node_type().as_str(),
                }
                .into())
            }
        };

        let current = belief.consultant_status;
        if current == transition.target {
            return Ok((node.clone(), false));
        }
        if !transition.allowed_from.contains(&current) {
            return Err(GraphError::ValidationError {
                reason: format!(
                    "invalid status transition: {} -> {}",
                    current.as_str(),
                    transition.target.as_str()
                ),
            }
            .into());
        }

        belief.consultant_status = transition.target;
        if transition.note.is_some() {
            belief.consultant_note = transition.note;
        }
        belief.updated_at = Utc::now();

        let archived = transition.target == ConsultantStatus::Archived;
        let entry = archived.then(|| {
            ledger::build_entry(
                belief_id,
                belief.confidence,
                belief.confidence,
                &belief.content,
                &belief.content,
                ChangeType::Archived,
                transition
                    .change_reason
                    .unwrap_or_else(|| "archived by consultant".to_string()),
                None,
            )
        });
        if archived {
            node.active = false;
        }
        let updated = node.clone();

        if let Some(entry) = entry {
            state
                .history
                .entry(belief_id.to_string())
                .or_default()
                .push(entry);
        }
        state.bump();
        debug!(
            belief_id = %belief_id,
            status = transition.target.as_str(),
            "consultant status changed"
        );
        Ok((updated, true))
    }

    /// Per-belief ledger, newest first. Side-effect free and restartable.
    pub fn history(&self, belief_id: &str) -> DossierResult<Vec<HistoryEntry>> {
        let guard = self.read();
        let node = guard
            .nodes
            .get(belief_id)
            .ok_or_else(|| GraphError::NotFound {
                id: belief_id.to_string(),
            })?;
        if !node.is_belief() {
            return Err(GraphError::WrongVariant {
                id: belief_id.to_string(),
                expected: "belief",
                actual: node.node_type().as_str(),
            }
            .into());
        }
        let mut entries = guard.history.get(belief_id).cloned().unwrap_or_default();
        entries.reverse();
        Ok(entries)
    }

    /// Default read view: active nodes, edges between active nodes,
    /// aggregate stats. Always reflects all committed writes.
    pub fn snapshot(&self) -> GraphSnapshot {
        self.build_snapshot(false)
    }

    /// Audit view including deactivated nodes and their edges.
    pub fn snapshot_full(&self) -> GraphSnapshot {
        self.build_snapshot(true)
    }

    fn build_snapshot(&self, include_inactive: bool) -> GraphSnapshot {
        let guard = self.read();

        let mut nodes: Vec<KnowledgeNode> = guard
            .nodes
            .values()
            .filter(|n| include_inactive || n.active)
            .cloned()
            .collect();
        nodes.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));

        let mut edges: Vec<KnowledgeEdge> = guard
            .edges
            .values()
            .filter(|e| {
                include_inactive
                    || (guard.nodes.get(&e.from_node_id).is_some_and(|n| n.active)
                        && guard.nodes.get(&e.to_node_id).is_some_and(|n| n.active))
            })
            .cloned()
            .collect();
        edges.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));

        let stats = stats::compute(&nodes, &edges);
        GraphSnapshot {
            project_id: self.project_id.clone(),
            version: guard.version,
            taken_at: Utc::now(),
            last_mutated_at: guard.last_mutated_at,
            nodes,
            edges,
            stats,
        }
    }

    /// Look up a single node (including deactivated ones).
    pub fn node(&self, id: &str) -> Option<KnowledgeNode> {
        self.read().nodes.get(id).cloned()
    }
}

fn validate_confidence(value: f64) -> Result<(), GraphError> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(GraphError::InvalidNode {
            reason: format!("confidence must be in [0,1], got {value}"),
        });
    }
    Ok(())
}
