//! # dossier-layout
//!
//! Hierarchical layout for a filtered node/edge subset: longest-path
//! layering over the cycle-free edge subset, barycenter crossing reduction,
//! then fixed-spacing coordinates. Deterministic for a given input so the
//! rendered graph does not jitter between runs on unchanged data.

pub mod coords;
pub mod filter;
pub mod ordering;
pub mod rank;

use tracing::debug;

use dossier_core::config::LayoutConfig;
use dossier_core::errors::DossierResult;
use dossier_core::models::{GraphLayout, GraphSnapshot, LayoutFilter};

pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lay out the subset of `snapshot` selected by `filter`.
    pub fn layout(
        &self,
        snapshot: &GraphSnapshot,
        filter: &LayoutFilter,
    ) -> DossierResult<GraphLayout> {
        let subset = filter::apply(snapshot, filter)?;
        let ranked = rank::assign(&subset);
        let ordered = ordering::order_ranks(&ranked, self.config.barycenter_sweeps);
        let positions = coords::assign(&ordered, &ranked, &self.config);
        debug!(
            nodes = positions.len(),
            edges = subset.edges.len(),
            "layout computed"
        );
        Ok(GraphLayout {
            positions,
            edges: subset.edges.into_iter().cloned().collect(),
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
