//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, and Axum server lifecycle.

use crate::config::Config;
use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Embedded migrations
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if the database connection, bind, or server runtime
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = SqlitePool::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(repository));
    let state = AppState::new(url_service, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        return;
    }

    tracing::info!("Shutdown signal received");
}
