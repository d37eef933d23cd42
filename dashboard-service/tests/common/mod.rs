//! Common test utilities for dashboard-service integration tests.

#![allow(dead_code)]

use dashboard_service::models::{CartItem, ClientId, RequestId, Service, ServiceId};
use dashboard_service::services::{DashboardStore, Seed, UserDirectory};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,dashboard_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Store and directory loaded from the built-in demo seed.
pub fn seeded() -> (DashboardStore, UserDirectory) {
    init_tracing();
    Seed::demo()
        .expect("Demo seed must parse")
        .build()
        .expect("Demo seed must build")
}

pub fn seeded_store() -> DashboardStore {
    seeded().0
}

pub fn client_id(id: &str) -> ClientId {
    ClientId::from(id)
}

pub fn request_id(id: &str) -> RequestId {
    RequestId::from(id)
}

/// Catalog entry from the seeded store.
pub fn service(store: &DashboardStore, id: &str) -> Service {
    store
        .service(&ServiceId::from(id))
        .expect("Service must exist in demo seed")
        .clone()
}

pub fn item(store: &DashboardStore, service_id: &str, quantity: u32) -> CartItem {
    CartItem::new(service(store, service_id), quantity)
}
