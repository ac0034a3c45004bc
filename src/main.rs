/*!
# Daybook - A Personal Journaling API

Daybook serves a small HTTP API for journal entries over a local SQLite
store. This file contains the main application flow: logging setup,
configuration, database initialization, and the HTTP listener.

## Configuration

The application can be configured with the following environment variables:
- `DAYBOOK_PORT`: Port for the HTTP listener (defaults to 8088)
- `DAYBOOK_DB`: Path to the SQLite database file (defaults to ./daybook.sqlite3)
*/

use std::net::SocketAddr;

use daybook::api::handlers::AppState;
use daybook::api::routes;
use daybook::{AppResult, Config, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The main entry point for the daybook server.
///
/// Coordinates the overall application flow:
/// 1. Initializes logging
/// 2. Loads configuration
/// 3. Opens the database and initializes the schema
/// 4. Builds the router and serves it until shutdown
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database cannot be
/// opened, or the listener cannot bind.
#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daybook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting daybook");

    let config = Config::load()?;
    let db = Database::open(&config.database_path)?;
    db.initialize_schema()?;

    let app = routes::create_router(AppState { db });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Daybook API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Daybook shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutdown signal received");
}
