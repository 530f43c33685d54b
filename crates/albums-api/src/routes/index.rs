//! Root welcome endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Text returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Hit the /albums endpoint to retrieve a list of albums!";

/// Welcome response.
#[derive(Serialize)]
pub struct WelcomeResponse {
    /// Pointer to the albums resource.
    pub message: &'static str,
}

/// GET /
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// Returns the root router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
