//! ProjectRegistry: concurrent per-project store access via DashMap.
//! Mutations on different projects never contend.

use std::sync::Arc;

use dashmap::DashMap;

use dossier_core::config::LedgerConfig;

use crate::engine::ProjectStore;

pub struct ProjectRegistry {
    projects: DashMap<String, Arc<ProjectStore>>,
    config: LedgerConfig,
}

impl ProjectRegistry {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            projects: DashMap::new(),
            config,
        }
    }

    /// Get the store for a project, creating it on first use.
    pub fn project(&self, project_id: &str) -> Arc<ProjectStore> {
        self.projects
            .entry(project_id.to_string())
            .or_insert_with(|| {
                Arc::new(ProjectStore::new(project_id, self.config.clone()))
            })
            .clone()
    }

    /// Get an existing project store without creating one.
    pub fn get(&self, project_id: &str) -> Option<Arc<ProjectStore>> {
        self.projects.get(project_id).map(|r| r.clone())
    }

    /// Drop a project's store (e.g. when the engagement closes).
    pub fn remove(&self, project_id: &str) -> Option<Arc<ProjectStore>> {
        self.projects.remove(project_id).map(|(_, v)| v)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn project_ids(&self) -> Vec<String> {
        self.projects.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
