//! Routes for the album catalog.
//!
//! Request bodies are read as raw bytes and parsed here rather than through
//! the `Json` extractor, so every malformed request gets a 400 with an
//! `{ "error": .. }` body instead of the extractor's default rejection.

use albums_catalog::application::{command_handlers, query_handlers};
use albums_catalog::domain::commands;
use albums_catalog::domain::validation::parse_album_id;
use albums_core::album::Album;
use albums_core::error::DomainError;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Returned when a request body is not valid JSON.
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Parses a request body. An empty body is treated as JSON `null`.
fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|_| ApiError(DomainError::invalid(INVALID_JSON_BODY)))
}

/// GET /albums
#[instrument(skip(state))]
async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = query_handlers::list_albums(&*state.album_repository).await?;
    Ok(Json(albums))
}

/// GET /albums/{id}
#[instrument(skip(state))]
async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let album_id = parse_album_id(&id)?;
    let album = query_handlers::get_album_by_id(album_id, &*state.album_repository).await?;
    Ok(Json(album))
}

/// POST /albums
#[instrument(skip(state, body))]
async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let command = commands::CreateAlbum {
        correlation_id: Uuid::new_v4(),
        fields: parse_body(&body)?,
    };

    info!(correlation_id = %command.correlation_id, "handling create_album command");

    let album = command_handlers::handle_create_album(&command, &*state.album_repository).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /albums/{id}
#[instrument(skip(state, body))]
async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Album>, ApiError> {
    let album_id = parse_album_id(&id)?;
    let command = commands::UpdateAlbum {
        correlation_id: Uuid::new_v4(),
        album_id,
        changes: parse_body(&body)?,
    };

    info!(correlation_id = %command.correlation_id, "handling update_album command");

    let album = command_handlers::handle_update_album(&command, &*state.album_repository).await?;
    Ok(Json(album))
}

/// DELETE /albums/{id}
#[instrument(skip(state))]
async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let command = commands::DeleteAlbum {
        correlation_id: Uuid::new_v4(),
        album_id: parse_album_id(&id)?,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_album command");

    let album = command_handlers::handle_delete_album(&command, &*state.album_repository).await?;
    Ok(Json(album))
}

/// Returns the router for the album catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_albums).post(create_album))
        .route(
            "/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
}
