//! # Travel Admin
//!
//! Administrative backend for a travel-content platform.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool, migrations and demo data
//! - HTTP server

use anyhow::Result;
use tracing::info;

use travel_admin::config::Settings;
use travel_admin::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    travel_admin::telemetry::init_tracing();

    info!("Starting Travel Admin...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        seed = settings.seed.enabled,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
