//! HTTP server initialization and runtime setup.
//!
//! Handles store construction, schema bootstrap, and the Axum server lifecycle.

use crate::application::services::ShortenService;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlStore;
use crate::infrastructure::persistence::{InMemoryUrlStore, PgUrlStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{RandomCodeGenerator, code_space};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Builds the configured store.
///
/// For PostgreSQL the initial pool connection is retried with exponential
/// backoff (`DB_CONNECT_RETRIES` extra attempts) so the service survives a
/// database that starts slightly later. Individual store operations are never
/// retried.
///
/// # Errors
///
/// Returns an error if the database stays unreachable.
pub async fn build_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Ok(Arc::new(InMemoryUrlStore::new()))
        }
        StoreBackend::Postgres => {
            let strategy = ExponentialBackoff::from_millis(100)
                .max_delay(std::time::Duration::from_secs(5))
                .map(jitter)
                .take(config.db_connect_retries);

            let store = Retry::spawn(strategy, || async {
                PgUrlStore::connect(config).await.inspect_err(|e| {
                    tracing::warn!("Database connection attempt failed: {}", e);
                })
            })
            .await
            .context("Failed to connect to database")?;

            tracing::info!("Connected to database");
            Ok(Arc::new(store))
        }
    }
}

/// Builds the store, bootstraps the schema, and wires the shorten service.
///
/// # Errors
///
/// Returns an error if the store cannot be reached or the schema cannot be created.
pub async fn build_service(config: &Config) -> Result<Arc<ShortenService>> {
    let store = build_store(config).await?;

    store
        .ensure_schema()
        .await
        .context("Failed to ensure database schema")?;
    tracing::info!("Schema ready");

    let generator = Arc::new(RandomCodeGenerator::new(config.code_length));
    tracing::info!(
        "Code length {} ({} possible codes), up to {} attempts per shorten",
        config.code_length,
        code_space(config.code_length),
        config.max_attempts
    );

    Ok(Arc::new(ShortenService::new(store, generator, config.max_attempts)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - URL store (PostgreSQL pool or in-memory map)
/// - `urls` table (idempotent)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let shorten_service = build_service(&config).await?;

    let state = AppState::new(shorten_service, config.base_url.as_str());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
