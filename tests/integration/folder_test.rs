//! Integration tests for folder operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_folders_starts_empty() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_folder_returns_folder_json() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/folders", Some(json!({ "name": "Work" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["name"], "Work");
    assert!(response.body["createdAt"].is_string());
    assert!(response.body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_folder_ids_are_unique() {
    let app = helpers::TestApp::new().await;

    let a = app.create_folder("Work").await;
    let b = app.create_folder("Home").await;
    let c = app.create_folder("Ideas").await;

    assert!(a != b && b != c && a != c);

    let response = app.request("GET", "/folders", None).await;
    assert_eq!(response.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_create_folder_empty_name() {
    let app = helpers::TestApp::new().await;

    for body in [json!({ "name": "" }), json!({ "name": "   " }), json!({})] {
        let response = app.request("POST", "/folders", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_create_folder_malformed_body() {
    let app = helpers::TestApp::new().await;

    let response = app.request_text("POST", "/folders", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_folder_duplicate_name() {
    let app = helpers::TestApp::new().await;
    app.create_folder("Work").await;

    let response = app
        .request("POST", "/folders", Some(json!({ "name": "Work" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_get_folder() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("Work").await;

    let found = app.request("GET", &format!("/folders/{id}"), None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["name"], "Work");

    let missing = app.request("GET", "/folders/999", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_rename_folder_raw_body() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("Work").await;

    let response = app
        .request_text("PUT", &format!("/folders/{id}/rename"), "Office")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["name"], "Office");
}

#[tokio::test]
async fn test_rename_folder_json_string_body() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("Work").await;

    let response = app
        .request("PUT", &format!("/folders/{id}/rename"), Some(json!("Office")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Office");
}

#[tokio::test]
async fn test_rename_unknown_folder_has_no_side_effects() {
    let app = helpers::TestApp::new().await;
    app.create_folder("Work").await;

    let response = app.request_text("PUT", "/folders/42/rename", "Other").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/folders", None).await;
    let names: Vec<&str> = list
        .body
        .as_array()
        .expect("folder list")
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Work"]);
}

#[tokio::test]
async fn test_rename_folder_to_taken_or_empty_name() {
    let app = helpers::TestApp::new().await;
    app.create_folder("Work").await;
    let home = app.create_folder("Home").await;

    let taken = app
        .request_text("PUT", &format!("/folders/{home}/rename"), "Work")
        .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
    assert_eq!(taken.body["error"], "CONFLICT");

    let empty = app
        .request_text("PUT", &format!("/folders/{home}/rename"), "  ")
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_folder_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("Work").await;

    let first = app.request("DELETE", &format!("/folders/{id}"), None).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let second = app.request("DELETE", &format!("/folders/{id}"), None).await;
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    let missing = app.request("GET", &format!("/folders/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_folder_id_is_validation_error() {
    let app = helpers::TestApp::new().await;

    for method in ["GET", "DELETE"] {
        let response = app.request(method, "/folders/abc", None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert!(response.body["message"].is_string());
    }
}

#[tokio::test]
async fn test_name_length_is_measured_after_trimming() {
    let app = helpers::TestApp::new().await;
    let name = "x".repeat(255);

    let padded = app
        .request(
            "POST",
            "/folders",
            Some(json!({ "name": format!("  {name}  ") })),
        )
        .await;
    assert_eq!(padded.status, StatusCode::OK);
    assert_eq!(padded.body["name"], name);

    let too_long = app
        .request("POST", "/folders", Some(json!({ "name": "y".repeat(256) })))
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
    assert_eq!(too_long.body["error"], "VALIDATION_ERROR");
}
