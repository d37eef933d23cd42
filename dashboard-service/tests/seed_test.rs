//! Seed file loading tests for dashboard-service.

mod common;

use dashboard_service::config::DashboardConfig;
use dashboard_service::models::ClientId;
use dashboard_service::services::Seed;
use dashboard_service::startup::Application;
use service_core::config::Config as CommonConfig;
use service_core::error::AppError;

fn config_with_seed(path: Option<std::path::PathBuf>) -> DashboardConfig {
    DashboardConfig {
        common: CommonConfig::default(),
        service_name: "dashboard-service-test".to_string(),
        log_level: "debug".to_string(),
        seed_path: path,
    }
}

#[test]
fn seed_round_trips_through_a_file() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");

    let mut seed = Seed::demo().unwrap();
    seed.clients.truncate(1);
    seed.requests.retain(|r| r.client_id == ClientId::from("c1"));
    std::fs::write(&path, serde_json::to_string(&seed).unwrap()).unwrap();

    let app = Application::build(config_with_seed(Some(path))).expect("Failed to build");
    assert_eq!(app.store().clients().count(), 1);
    assert_eq!(app.store().requests().count(), 1);
}

#[test]
fn missing_seed_file_is_a_config_error() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let result = Application::build(config_with_seed(Some(dir.path().join("absent.json"))));
    assert!(matches!(result, Err(AppError::ConfigError(_))));
}

#[test]
fn malformed_seed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(&path, "{ \"clients\": [ { \"id\": 1 } ] }").unwrap();
    assert!(matches!(Seed::from_path(&path), Err(AppError::ConfigError(_))));
}

#[test]
fn seed_with_counter_above_quota_is_rejected() {
    let mut seed = Seed::demo().unwrap();
    seed.clients[0].deliverables_completed.posts = 11;
    assert!(matches!(seed.build(), Err(AppError::ConfigError(_))));
}

#[test]
fn seed_with_wrong_request_total_is_rejected() {
    let mut seed = Seed::demo().unwrap();
    seed.requests[1].total_amount = rust_decimal::Decimal::from(1);
    assert!(matches!(seed.build(), Err(AppError::ConfigError(_))));
}

#[test]
fn demo_application_renders_snapshot() {
    common::init_tracing();
    let app = Application::build(config_with_seed(None)).unwrap();
    let json = app.snapshot_json().unwrap();
    assert!(json.contains("Kumar Real Estate"));
    assert!(json.contains("req-01"));
    assert_eq!(app.directory().users().len(), 3);
}

#[test]
fn seed_request_with_tampered_rate_is_rejected() {
    let mut seed = Seed::demo().unwrap();
    seed.requests[1].requested_items[0].service.rate = rust_decimal::Decimal::from(-6000);
    seed.requests[1].total_amount = rust_decimal::Decimal::ZERO;
    assert!(matches!(seed.build(), Err(AppError::ConfigError(_))));
}

#[test]
fn seed_catalog_with_negative_rate_is_rejected() {
    let mut seed = Seed::demo().unwrap();
    seed.services[0].rate = rust_decimal::Decimal::from(-200);
    assert!(matches!(seed.build(), Err(AppError::ConfigError(_))));
}
