mod completion;
mod config;
mod db;
mod error;
mod handlers;
mod routes;
mod state;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lingo_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize app state
    let app_state = AppState::new(&config)?;

    // Ensure the table exists on every start; a failure leaves the process
    // serving and individual inserts failing instead.
    match app_state.store.ensure_schema().await {
        Ok(()) => info!("Table created or already exists"),
        Err(e) => error!("Error creating table: {:#}", e),
    }

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down");
}
