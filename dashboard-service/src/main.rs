//! Dashboard Service entry point.
//!
//! Seeds the store, logs what an admin would see on first sign-in, and prints
//! the snapshot a presentation layer renders from.

use dashboard_service::config::DashboardConfig;
use dashboard_service::startup::Application;

use service_core::observability::init_tracing;

fn main() -> std::io::Result<()> {
    // Load configuration
    let config = DashboardConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Initialize tracing
    init_tracing(&config.service_name, &config.log_level, config.common.log_format)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting dashboard-service");

    tracing::info!(
        service_name = %config.service_name,
        environment = %config.common.environment,
        seed_path = ?config.seed_path,
        "Configuration loaded"
    );

    let app = Application::build(config).map_err(|e| {
        tracing::error!(error = %e, "Failed to build application");
        std::io::Error::other(format!("Application build error: {}", e))
    })?;

    let store = app.store();
    for client in store.clients() {
        tracing::info!(
            client_id = %client.id,
            company = %client.profile.company,
            project_status = client.project_status.as_str(),
            total_add_on_charges = %client.contract.total_add_on_charges,
            "Client loaded"
        );
    }
    for request in store.pending_requests() {
        tracing::info!(
            request_id = %request.id,
            client_company = %request.client_company,
            total_amount = %request.total_amount,
            "Add-on request awaiting approval"
        );
    }

    let snapshot = app.snapshot_json().map_err(|e| {
        tracing::error!(error = %e, "Failed to render snapshot");
        std::io::Error::other(e.to_string())
    })?;
    println!("{}", snapshot);

    tracing::info!("Service shutdown complete");
    Ok(())
}
