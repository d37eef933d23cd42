//! Application startup: configuration, seed and store wiring.

use crate::config::DashboardConfig;
use crate::services::{init_metrics, DashboardStore, Seed, UserDirectory};
use service_core::error::AppError;

/// Owns the session's store for the lifetime of the process.
pub struct Application {
    config: DashboardConfig,
    store: DashboardStore,
    directory: UserDirectory,
}

impl Application {
    /// Build the application with the given configuration.
    pub fn build(config: DashboardConfig) -> Result<Self, AppError> {
        init_metrics();

        let seed = match &config.seed_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed file");
                Seed::from_path(path)?
            }
            None => {
                tracing::info!("Loading built-in demo seed");
                Seed::demo()?
            }
        };

        let (store, directory) = seed.build().map_err(|e| {
            tracing::error!(error = %e, "Failed to seed store");
            e
        })?;

        Ok(Self {
            config,
            store,
            directory,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DashboardStore {
        &mut self.store
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Pretty-printed JSON of the current store snapshot.
    pub fn snapshot_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(&self.store.snapshot()).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize snapshot: {}", e))
        })
    }
}
