//! Priority-ordered packing of graph content into a character allowance
//! derived from the token budget: facts first, then beliefs by confidence,
//! then insights by confidence. Packing stops at the first entry that does
//! not fit, so lower-priority sections starve before higher-priority ones.

use std::cmp::Ordering;

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use dossier_core::config::SynthesisConfig;
use dossier_core::models::{ContextDocument, GraphSnapshot, SectionUsage};
use dossier_core::{KnowledgeNode, NodeType};

use crate::sections;
use crate::tokens::TokenEstimator;

/// Re-entrant synthesizer. Holds no graph state, only a per-project cache
/// of the last document, which is what makes re-synthesis idempotent:
/// an unchanged graph version returns the cached document byte-identical,
/// `synthesized_at` included.
pub struct ContextSynthesizer {
    config: SynthesisConfig,
    estimator: TokenEstimator,
    cache: DashMap<String, ContextDocument>,
}

impl ContextSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        let estimator = TokenEstimator::new(config.chars_per_token);
        Self {
            config,
            estimator,
            cache: DashMap::new(),
        }
    }

    /// Synthesize the digest for a snapshot. Explicit and idempotent:
    /// no intervening graph mutation means the previous document comes back
    /// unchanged, with the staleness flag cleared.
    pub fn synthesize(&self, snapshot: &GraphSnapshot) -> ContextDocument {
        if let Some(cached) = self.cache.get(&snapshot.project_id) {
            if cached.graph_version == snapshot.version {
                let mut doc = cached.clone();
                doc.stale = false;
                return doc;
            }
        }

        let doc = self.build(snapshot);
        self.cache.insert(snapshot.project_id.clone(), doc.clone());
        debug!(
            project_id = %snapshot.project_id,
            graph_version = snapshot.version,
            token_estimate = doc.token_estimate,
            "context synthesized"
        );
        doc
    }

    /// The last synthesized document for a project, with its staleness flag
    /// recomputed against the given snapshot. `None` before first synthesis.
    pub fn current(&self, snapshot: &GraphSnapshot) -> Option<ContextDocument> {
        let cached = self.cache.get(&snapshot.project_id)?;
        let mut doc = cached.clone();
        doc.stale = self.is_stale(&doc, snapshot);
        Some(doc)
    }

    /// Stale when the graph moved past the document's version, or the
    /// configured interval elapsed since synthesis.
    pub fn is_stale(&self, doc: &ContextDocument, snapshot: &GraphSnapshot) -> bool {
        if doc.graph_version < snapshot.version {
            return true;
        }
        let age = Utc::now().signed_duration_since(doc.synthesized_at);
        age.num_seconds() >= self.config.staleness_interval_secs as i64
    }

    fn build(&self, snapshot: &GraphSnapshot) -> ContextDocument {
        let budget_chars = self.estimator.budget_chars(self.config.token_budget);

        let facts = nodes_of(snapshot, NodeType::Fact);
        let mut beliefs = nodes_of(snapshot, NodeType::Belief);
        sort_by_confidence(&mut beliefs);
        let mut insights = nodes_of(snapshot, NodeType::Insight);
        sort_by_confidence(&mut insights);

        let mut text = String::new();
        let mut used_chars = 0usize;
        let mut usages = Vec::new();
        let mut exhausted = false;

        for (title, nodes) in [
            (sections::FACTS_TITLE, facts),
            (sections::BELIEFS_TITLE, beliefs),
            (sections::INSIGHTS_TITLE, insights),
        ] {
            if exhausted || nodes.is_empty() {
                continue;
            }
            let header = sections::section_header(title);
            let header_chars = header.chars().count();

            let mut section_text = String::new();
            let mut section_chars = 0usize;
            let mut entry_count = 0usize;
            for node in nodes {
                let line = sections::render(node);
                let line_chars = line.chars().count();
                let cost = if entry_count == 0 {
                    header_chars + line_chars
                } else {
                    line_chars
                };
                if used_chars + section_chars + cost > budget_chars {
                    exhausted = true;
                    break;
                }
                if entry_count == 0 {
                    section_text.push_str(&header);
                    section_chars += header_chars;
                }
                section_text.push_str(&line);
                section_chars += line_chars;
                entry_count += 1;
            }

            if entry_count > 0 {
                text.push_str(&section_text);
                used_chars += section_chars;
                usages.push(SectionUsage {
                    title: title.to_string(),
                    entry_count,
                    chars_used: section_chars,
                    token_estimate: self.estimator.estimate_chars(section_chars),
                });
            }
        }

        let fingerprint = blake3::hash(text.as_bytes()).to_hex().to_string();
        ContextDocument {
            project_id: snapshot.project_id.clone(),
            token_estimate: self.estimator.estimate_chars(used_chars),
            token_budget: self.config.token_budget,
            text,
            sections: usages,
            synthesized_at: Utc::now(),
            graph_version: snapshot.version,
            stale: false,
            fingerprint,
        }
    }
}

impl Default for ContextSynthesizer {
    fn default() -> Self {
        Self::new(SynthesisConfig::default())
    }
}

fn nodes_of(snapshot: &GraphSnapshot, node_type: NodeType) -> Vec<&KnowledgeNode> {
    snapshot
        .nodes
        .iter()
        .filter(|n| n.node_type() == node_type)
        .collect()
}

/// Confidence descending, ties by most recent update first, then id.
fn sort_by_confidence(nodes: &mut [&KnowledgeNode]) {
    nodes.sort_by(|a, b| {
        let ca = a.confidence().map(f64::from).unwrap_or(0.0);
        let cb = b.confidence().map(f64::from).unwrap_or(0.0);
        cb.partial_cmp(&ca)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.updated_at().cmp(&a.updated_at()))
            .then_with(|| a.id.cmp(&b.id))
    });
}
