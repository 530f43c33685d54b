//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use albums_api::build_router;
use albums_api::state::AppState;
use albums_core::repository::AlbumRepository;
use albums_store::memory_album_repository::InMemoryAlbumRepository;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build the full app router over a fresh seeded store. Uses the same route
/// table as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryAlbumRepository::seeded()))
}

/// Build the full app router over the given store.
pub fn build_test_app_with(album_repository: Arc<dyn AlbumRepository>) -> Router {
    build_router(AppState::new(album_repository))
}

/// Send a request and return the raw response.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

async fn into_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn with_json_body(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    into_json(send(app, request).await).await
}

async fn without_body(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    into_json(send(app, request).await).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    with_json_body(app, "POST", uri, body).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    with_json_body(app, "PUT", uri, body).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    without_body(app, "GET", uri).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    without_body(app, "DELETE", uri).await
}
