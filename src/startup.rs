//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::config::Settings;
use crate::infrastructure::database::{self, HealthProbe, PgHealthProbe};
use crate::infrastructure::repositories::Repositories;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Data-access handle, constructed once at startup
    pub repos: Repositories,
    /// Store connectivity check for the readiness probe
    pub probe: Arc<dyn HealthProbe>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let db = database::create_pool(&settings.database)
            .await
            .context("failed to connect to database")?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db)
            .await
            .context("failed to run database migrations")?;
        tracing::info!("Database migrations applied");

        let repos = Repositories::postgres(db.clone());

        if settings.seed.enabled {
            database::seed_if_empty(&repos).await;
        }

        let state = AppState {
            repos,
            probe: Arc::new(PgHealthProbe::new(db)),
        };

        // Build router with middleware
        let router = routes::create_router(state).layer(
            ServiceBuilder::new()
                .layer(create_trace_layer())
                .layer(create_cors_layer(&settings.cors))
                .layer(CompressionLayer::new()),
        );

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
