//! Integration tests for note operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_note_returns_note_json() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;

    let response = app
        .request(
            "POST",
            &format!("/folders/{folder}/notes"),
            Some(json!({ "title": "Todo", "content": "- ship it" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["folder"], folder);
    assert_eq!(response.body["title"], "Todo");
    assert_eq!(response.body["content"], "- ship it");
    assert!(response.body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_note_in_unknown_folder() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/folders/7/notes",
            Some(json!({ "title": "Orphan", "content": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_note_empty_title() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;

    let response = app
        .request(
            "POST",
            &format!("/folders/{folder}/notes"),
            Some(json!({ "title": " ", "content": "body" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_notes_by_folder() {
    let app = helpers::TestApp::new().await;
    let work = app.create_folder("Work").await;
    let home = app.create_folder("Home").await;
    app.create_note(work, "one", None).await;
    app.create_note(work, "two", Some("body")).await;
    app.create_note(home, "three", None).await;

    let response = app
        .request("GET", &format!("/folders/{work}/notes"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .body
        .as_array()
        .expect("note list")
        .iter()
        .filter_map(|n| n["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["one", "two"]);

    let unknown = app.request("GET", "/folders/99/notes", None).await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.body, json!([]));
}

#[tokio::test]
async fn test_get_unknown_note() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/notes/1", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_note_then_get() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let id = app.create_note(folder, "Draft", Some("v1")).await;

    let before = app.request("GET", &format!("/notes/{id}"), None).await;

    let updated = app
        .request(
            "PUT",
            &format!("/notes/{id}"),
            Some(json!({ "title": "Final", "content": "v2" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let after = app.request("GET", &format!("/notes/{id}"), None).await;
    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(after.body["title"], "Final");
    assert_eq!(after.body["content"], "v2");
    assert_eq!(after.body["folder"], folder);
    assert_eq!(after.body["createdAt"], before.body["createdAt"]);

    let before_ts = before.body["updatedAt"].as_str().expect("updatedAt");
    let after_ts = after.body["updatedAt"].as_str().expect("updatedAt");
    let parse = |s: &str| {
        chrono::DateTime::parse_from_rfc3339(s).expect("RFC 3339 timestamp")
    };
    assert!(parse(after_ts) >= parse(before_ts));
}

#[tokio::test]
async fn test_update_unknown_note() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/notes/3",
            Some(json!({ "title": "Nope", "content": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_note_empty_title() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let id = app.create_note(folder, "Draft", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/notes/{id}"),
            Some(json!({ "title": "", "content": "x" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_note_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let id = app.create_note(folder, "Todo", None).await;

    let first = app.request("DELETE", &format!("/notes/{id}"), None).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let second = app.request("DELETE", &format!("/notes/{id}"), None).await;
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    let missing = app.request("GET", &format!("/notes/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_folder_removes_its_notes() {
    let app = helpers::TestApp::new().await;

    let folder = app.create_folder("Work").await;
    assert_eq!(folder, 1);

    let note = app.create_note(folder, "Todo", None).await;
    assert_eq!(note, 1);

    let fetched = app.request("GET", "/notes/1", None).await;
    assert_eq!(fetched.body["folder"], 1);

    let deleted = app.request("DELETE", "/folders/1", None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", "/notes/1", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let listed = app.request("GET", "/folders/1/notes", None).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_non_numeric_note_id_is_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/notes/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let listed = app.request("GET", "/folders/abc/notes", None).await;
    assert_eq!(listed.status, StatusCode::BAD_REQUEST);
    assert_eq!(listed.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_padded_title_at_limit_is_accepted() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let title = "t".repeat(255);

    let response = app
        .request(
            "POST",
            &format!("/folders/{folder}/notes"),
            Some(json!({ "title": format!("\n{title} ") })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], title);
}
