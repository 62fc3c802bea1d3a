//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use noteblock_api::{AppState, build_app};
use noteblock_core::config::{AppConfig, DatabaseConfig};
use noteblock_database::DatabasePool;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory database
    pub async fn new() -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to create in-memory database");

        let config = AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        };

        let router = build_app(AppState::new(config, db.clone()));

        Self { router, db }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.send(method, path, "application/json", body_str).await
    }

    /// Make a request with a plain-text body
    pub async fn request_text(&self, method: &str, path: &str, body: &str) -> TestResponse {
        self.send(method, path, "text/plain", body.to_string()).await
    }

    /// Create a folder and return its id
    pub async fn create_folder(&self, name: &str) -> i64 {
        let response = self
            .request("POST", "/folders", Some(serde_json::json!({ "name": name })))
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Folder create failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in folder response")
    }

    /// Create a note in a folder and return its id
    pub async fn create_note(&self, folder_id: i64, title: &str, content: Option<&str>) -> i64 {
        let response = self
            .request(
                "POST",
                &format!("/folders/{folder_id}/notes"),
                Some(serde_json::json!({ "title": title, "content": content })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Note create failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in note response")
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: String,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
