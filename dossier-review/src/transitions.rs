//! The status transition table and its application through the store.
//!
//! Allowed transitions:
//!   none -> confirmed
//!   none -> disputed
//!   none | confirmed | disputed -> archived
//!
//! Re-applying the current status is a no-op (no ledger entry, note
//! untouched). That includes re-archiving an already-archived belief, so a
//! belief can never leave `archived` through review actions.

use std::sync::Arc;

use tracing::info;

use dossier_core::errors::DossierResult;
use dossier_core::graph::{ConsultantStatus, KnowledgeNode};
use dossier_store::{ProjectStore, ReviewTransition};

/// A review action issued by a consultant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Confirm,
    Dispute,
    Archive,
}

impl ReviewAction {
    pub fn target(self) -> ConsultantStatus {
        match self {
            Self::Confirm => ConsultantStatus::Confirmed,
            Self::Dispute => ConsultantStatus::Disputed,
            Self::Archive => ConsultantStatus::Archived,
        }
    }

    /// Statuses the action may legally be applied from. The target status
    /// itself is always accepted as an idempotent no-op.
    pub fn allowed_from(self) -> Vec<ConsultantStatus> {
        match self {
            Self::Confirm | Self::Dispute => vec![ConsultantStatus::None],
            Self::Archive => vec![
                ConsultantStatus::None,
                ConsultantStatus::Confirmed,
                ConsultantStatus::Disputed,
            ],
        }
    }
}

/// Result of applying a review action.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub belief: KnowledgeNode,
    /// False when the action was an idempotent no-op.
    pub changed: bool,
}

/// Applies review actions against one project's store.
pub struct ReviewEngine {
    store: Arc<ProjectStore>,
}

impl ReviewEngine {
    pub fn new(store: Arc<ProjectStore>) -> Self {
        Self { store }
    }

    pub fn confirm(&self, belief_id: &str, note: Option<String>) -> DossierResult<ReviewOutcome> {
        self.apply(belief_id, ReviewAction::Confirm, note)
    }

    pub fn dispute(&self, belief_id: &str, note: Option<String>) -> DossierResult<ReviewOutcome> {
        self.apply(belief_id, ReviewAction::Dispute, note)
    }

    /// Archive records an `archived` ledger entry and deactivates the node
    /// in one atomic store transition.
    pub fn archive(&self, belief_id: &str, note: Option<String>) -> DossierResult<ReviewOutcome> {
        self.apply(belief_id, ReviewAction::Archive, note)
    }

    pub fn apply(
        &self,
        belief_id: &str,
        action: ReviewAction,
        note: Option<String>,
    ) -> DossierResult<ReviewOutcome> {
        let change_reason = note.clone();
        let (belief, changed) = self.store.transition_status(
            belief_id,
            ReviewTransition {
                target: action.target(),
                allowed_from: action.allowed_from(),
                note,
                change_reason,
            },
        )?;
        if changed {
            info!(
                belief_id = %belief_id,
                status = action.target().as_str(),
                "review action applied"
            );
        }
        Ok(ReviewOutcome { belief, changed })
    }
}
