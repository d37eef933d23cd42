//! Metrics module for dashboard-service.
//! Provides Prometheus counters for the state transitions.

use once_cell::sync::Lazy;
use prometheus::{
    histogram_opts, opts, register_counter, register_histogram_vec, register_int_counter_vec,
    Counter, Encoder, HistogramVec, IntCounterVec, TextEncoder,
};
use service_core::error::AppError;
use std::sync::OnceLock;

/// Transition duration histogram
pub static TRANSITION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        histogram_opts!(
            "dashboard_transition_duration_seconds",
            "State transition duration",
            vec![0.00001, 0.0001, 0.001, 0.01, 0.1]
        ),
        &["operation"]
    )
    .expect("Failed to register TRANSITION_DURATION")
});

/// Add-on submissions by outcome (submitted/rejected)
pub static ADD_ON_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Approve/reject decisions
pub static REQUEST_DECISIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Approved add-on charges (monetary tracking)
pub static ADD_ON_CHARGES_TOTAL: OnceLock<Counter> = OnceLock::new();

/// Deliverable counter adjustments
pub static DELIVERABLE_ADJUSTMENTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Error counter for alerting
pub static ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup.
pub fn init_metrics() {
    ADD_ON_REQUESTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "dashboard_add_on_requests_total",
                "Total add-on request submissions by outcome"
            ),
            &["outcome"]
        )
        .expect("Failed to register ADD_ON_REQUESTS_TOTAL")
    });

    REQUEST_DECISIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "dashboard_request_decisions_total",
                "Total add-on request decisions by resulting status"
            ),
            &["status"]
        )
        .expect("Failed to register REQUEST_DECISIONS_TOTAL")
    });

    ADD_ON_CHARGES_TOTAL.get_or_init(|| {
        register_counter!(opts!(
            "dashboard_add_on_charges_total",
            "Total approved add-on charges"
        ))
        .expect("Failed to register ADD_ON_CHARGES_TOTAL")
    });

    DELIVERABLE_ADJUSTMENTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "dashboard_deliverable_adjustments_total",
                "Total deliverable counter adjustments"
            ),
            &["deliverable", "direction", "clamped"]
        )
        .expect("Failed to register DELIVERABLE_ADJUSTMENTS_TOTAL")
    });

    ERRORS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("dashboard_errors_total", "Total errors by type for alerting"),
            &["error_type", "operation"]
        )
        .expect("Failed to register ERRORS_TOTAL")
    });

    // Force initialization of lazy statics
    let _ = &*TRANSITION_DURATION;
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> Result<String, AppError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Metrics are not UTF-8: {}", e)))
}

/// Record an add-on submission outcome.
pub fn record_add_on_request(outcome: &str) {
    if let Some(counter) = ADD_ON_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

/// Record an approve/reject decision.
pub fn record_request_decision(status: &str) {
    if let Some(counter) = REQUEST_DECISIONS_TOTAL.get() {
        counter.with_label_values(&[status]).inc();
    }
}

/// Record an approved charge amount.
pub fn record_add_on_charge(amount: f64) {
    if let Some(counter) = ADD_ON_CHARGES_TOTAL.get() {
        counter.inc_by(amount);
    }
}

/// Record a deliverable adjustment; `clamped` is true when the count did not move.
pub fn record_deliverable_adjustment(deliverable: &str, direction: &str, clamped: bool) {
    if let Some(counter) = DELIVERABLE_ADJUSTMENTS_TOTAL.get() {
        let clamped = if clamped { "true" } else { "false" };
        counter
            .with_label_values(&[deliverable, direction, clamped])
            .inc();
    }
}

/// Record an error for alerting.
pub fn record_error(error_type: &str, operation: &str) {
    if let Some(counter) = ERRORS_TOTAL.get() {
        counter.with_label_values(&[error_type, operation]).inc();
    }
}
