//! Integration tests for the root and health endpoints.

mod common;

use std::sync::Arc;

use albums_test_support::FailingAlbumRepository;
use axum::http::StatusCode;

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Hit the /albums endpoint to retrieve a list of albums!"
    );
}

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["albums"], 6);
}

#[tokio::test]
async fn test_health_reports_degraded_when_store_fails() {
    let app = common::build_test_app_with(Arc::new(FailingAlbumRepository));

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "degraded");
    assert!(json.get("albums").is_none());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app();

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/nonexistent")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
