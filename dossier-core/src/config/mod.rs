pub mod defaults;

mod layout_config;
mod ledger_config;
mod synthesis_config;

pub use layout_config::LayoutConfig;
pub use ledger_config::LedgerConfig;
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{DossierError, DossierResult};

/// Top-level engine configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DossierConfig {
    pub ledger: LedgerConfig,
    pub layout: LayoutConfig,
    pub synthesis: SynthesisConfig,
}

impl DossierConfig {
    /// Parse a configuration from a TOML string. Missing sections and
    /// fields fall back to defaults.
    pub fn from_toml_str(s: &str) -> DossierResult<Self> {
        toml::from_str(s).map_err(|e| DossierError::Config {
            reason: e.to_string(),
        })
    }
}
