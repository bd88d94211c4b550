//! Coordinate assignment: rank gives the vertical axis, in-rank order the
//! horizontal one, with fixed spacing from config.

use dossier_core::config::LayoutConfig;
use dossier_core::models::NodePosition;

use crate::ordering::RankOrder;
use crate::rank::Ranked;

pub fn assign(order: &RankOrder, ranked: &Ranked, config: &LayoutConfig) -> Vec<NodePosition> {
    let mut positions = Vec::with_capacity(ranked.node_ids.len());
    for (&rank, ids) in order {
        for (slot, id) in ids.iter().enumerate() {
            positions.push(NodePosition {
                node_id: id.clone(),
                x: slot as f64 * config.node_spacing_x,
                y: rank as f64 * config.node_spacing_y,
                rank,
            });
        }
    }
    positions
}
