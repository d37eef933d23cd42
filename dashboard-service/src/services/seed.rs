//! Initial store contents, supplied once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use tracing::{info, instrument, warn};

use crate::models::{AddOnRequest, ClientRecord, RenewalPlan, Service, User, UserRole};
use crate::services::directory::UserDirectory;
use crate::services::store::DashboardStore;

const DEMO_SEED: &str = include_str!("../../seed/demo.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub renewal_plans: Vec<RenewalPlan>,
    pub clients: Vec<ClientRecord>,
    /// Historical requests in submission order.
    #[serde(default)]
    pub requests: Vec<AddOnRequest>,
}

impl Seed {
    /// Built-in demo data: two clients, seven services, three renewal plans.
    pub fn demo() -> Result<Self, AppError> {
        Ok(serde_json::from_str(DEMO_SEED)?)
    }

    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to read seed file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Validate and load into a fresh store and user directory.
    pub fn build(self) -> Result<(DashboardStore, UserDirectory), AppError> {
        let invalid = |e: AppError| AppError::ConfigError(anyhow::anyhow!("Invalid seed: {}", e));

        let mut store = DashboardStore::new(self.services, self.renewal_plans).map_err(invalid)?;
        for client in self.clients {
            store.insert_client(client).map_err(invalid)?;
        }
        for request in self.requests {
            store.insert_request(request).map_err(invalid)?;
        }

        for user in &self.users {
            let bound = user.client_id.as_ref();
            match (user.role, bound) {
                (UserRole::Client, Some(client_id)) if !store.client_store().contains(client_id) => {
                    warn!(user_id = %user.id, client_id = %client_id, "User bound to unknown client");
                }
                (UserRole::Client, None) => {
                    warn!(user_id = %user.id, "Client user has no client record");
                }
                _ => {}
            }
        }

        info!(
            clients = store.client_store().len(),
            requests = store.request_store().len(),
            services = store.catalog().len(),
            users = self.users.len(),
            "Seed loaded"
        );

        Ok((store, UserDirectory::new(self.users)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientId;

    #[test]
    fn demo_seed_parses_and_builds() {
        let (store, directory) = Seed::demo().unwrap().build().unwrap();
        assert_eq!(store.client_store().len(), 2);
        assert_eq!(store.request_store().len(), 2);
        assert_eq!(store.catalog().len(), 7);
        assert_eq!(store.renewal_plans().len(), 3);
        assert_eq!(directory.users().len(), 3);
    }

    #[test]
    fn seed_with_duplicate_client_is_rejected() {
        let mut seed = Seed::demo().unwrap();
        let duplicate = seed.clients[0].clone();
        seed.clients.push(duplicate);
        assert!(matches!(seed.build(), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn seed_request_for_unknown_client_is_rejected() {
        let mut seed = Seed::demo().unwrap();
        seed.requests[0].client_id = ClientId::from("c9");
        assert!(matches!(seed.build(), Err(AppError::ConfigError(_))));
    }
}
