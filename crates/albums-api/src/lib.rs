//! Albums API — HTTP surface for the album catalog.
//!
//! The binary in `main.rs` and the integration tests share
//! [`build_router`], so both serve exactly the same route table.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Allows any origin and header, and the methods the API serves.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::index::router())
        .merge(routes::health::router())
        .nest("/albums", routes::albums::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}
