//! Integration tests for the health endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_ok() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_health_unavailable_when_database_closed() {
    let app = helpers::TestApp::new().await;
    app.db.close().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");
    assert_eq!(response.body["message"], "Database is unreachable");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
