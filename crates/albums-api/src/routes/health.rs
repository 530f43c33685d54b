//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the album store cannot be read.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of albums currently in the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<usize>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.album_repository.list().await {
        Ok(albums) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                albums: Some(albums.len()),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "health check could not read album store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    albums: None,
                }),
            )
        }
    }
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
