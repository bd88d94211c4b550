use serde::{Deserialize, Serialize};

use super::defaults;

/// Layout-engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent nodes within a rank.
    pub node_spacing_x: f64,
    /// Vertical distance between ranks.
    pub node_spacing_y: f64,
    /// Number of barycenter ordering sweeps (down + up counts as one).
    pub barycenter_sweeps: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_spacing_x: defaults::DEFAULT_NODE_SPACING_X,
            node_spacing_y: defaults::DEFAULT_NODE_SPACING_Y,
            barycenter_sweeps: defaults::DEFAULT_BARYCENTER_SWEEPS,
        }
    }
}
