//! Metrics recording tests for dashboard-service.

mod common;

use common::{client_id, item, request_id, seeded_store};
use dashboard_service::models::{ApprovalStatus, DeliverableChange, DeliverableType};
use dashboard_service::services::{get_metrics, init_metrics};
use rust_decimal::Decimal;
use serial_test::serial;

#[test]
#[serial]
fn transitions_are_counted() {
    init_metrics();
    let mut store = seeded_store();

    store
        .submit_add_on_request(&client_id("c1"), vec![item(&store, "s1", 1)], Decimal::from(200))
        .unwrap();
    store
        .update_request_status(&request_id("req-01"), ApprovalStatus::Approved)
        .unwrap();
    store
        .adjust_deliverable_count(&client_id("c1"), DeliverableType::Posts, DeliverableChange::Increment)
        .unwrap();
    let _ = store.update_request_status(&request_id("req-missing"), ApprovalStatus::Rejected);

    let metrics = get_metrics().unwrap();
    assert!(metrics.contains("dashboard_add_on_requests_total{outcome=\"submitted\"}"));
    assert!(metrics.contains("dashboard_request_decisions_total"));
    assert!(metrics.contains("dashboard_add_on_charges_total"));
    assert!(metrics.contains("dashboard_deliverable_adjustments_total"));
    assert!(metrics.contains("dashboard_errors_total"));
    assert!(metrics.contains("dashboard_transition_duration_seconds"));
}

#[test]
#[serial]
fn init_metrics_is_idempotent() {
    init_metrics();
    init_metrics();
    assert!(get_metrics().is_ok());
}
