//! Albums API server entry point.

use std::sync::Arc;

use albums_api::config::ServerConfig;
use albums_api::error::AppError;
use albums_api::state::AppState;
use albums_api::{build_router, telemetry};
use albums_store::memory_album_repository::InMemoryAlbumRepository;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    telemetry::init(config.log_format);

    tracing::info!("Starting Albums API server");

    // The catalog is volatile: every start begins from the sample albums.
    let app_state = AppState::new(Arc::new(InMemoryAlbumRepository::seeded()));
    let app = build_router(app_state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
