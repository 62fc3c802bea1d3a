//! Integration tests for note blocks.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

async fn create_block(
    app: &helpers::TestApp,
    note: i64,
    body: serde_json::Value,
) -> helpers::TestResponse {
    app.request("POST", &format!("/notes/{note}/blocks"), Some(body))
        .await
}

#[tokio::test]
async fn test_create_block_returns_block_json() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let note = app.create_note(folder, "Todo", None).await;

    let response = create_block(
        &app,
        note,
        json!({ "type": "text", "content": { "text": "hello" } }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["note"], note);
    assert_eq!(response.body["type"], "text");
    assert_eq!(response.body["index"], 0);
    assert_eq!(response.body["content"]["text"], "hello");
    assert!(response.body["createdAt"].is_string());
}

#[tokio::test]
async fn test_blocks_are_listed_by_index() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let note = app.create_note(folder, "Todo", None).await;

    for (index, text) in [(2, "c"), (0, "a"), (1, "b")] {
        let response = create_block(
            &app,
            note,
            json!({ "type": "text", "index": index, "content": { "text": text } }),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", &format!("/notes/{note}/blocks"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let texts: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|b| b["content"]["text"].as_str().expect("text"))
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_create_block_in_unknown_note() {
    let app = helpers::TestApp::new().await;

    let response = create_block(
        &app,
        42,
        json!({ "type": "text", "content": { "text": "orphan" } }),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_block_rejects_bad_content() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let note = app.create_note(folder, "Todo", None).await;

    let wrong_shape = create_block(
        &app,
        note,
        json!({ "type": "image", "content": { "text": "not an image" } }),
    )
    .await;
    assert_eq!(wrong_shape.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_shape.body["error"], "VALIDATION_ERROR");

    let unknown_type = create_block(
        &app,
        note,
        json!({ "type": "video", "content": { "text": "x" } }),
    )
    .await;
    assert_eq!(unknown_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_type.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_block() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let note = app.create_note(folder, "Todo", None).await;
    let created = create_block(
        &app,
        note,
        json!({ "type": "text", "content": { "text": "draft" } }),
    )
    .await;
    let block = created.body["id"].as_i64().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/notes/{note}/blocks/{block}"),
            Some(json!({ "type": "canvas", "index": 3, "content": { "data": "[]" } })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "canvas");
    assert_eq!(response.body["index"], 3);
    assert_eq!(response.body["content"]["data"], "[]");
    assert_eq!(response.body["createdAt"], created.body["createdAt"]);
}

#[tokio::test]
async fn test_update_block_through_other_note_is_not_found() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let note = app.create_note(folder, "Todo", None).await;
    let other = app.create_note(folder, "Other", None).await;
    let created = create_block(
        &app,
        note,
        json!({ "type": "text", "content": { "text": "mine" } }),
    )
    .await;
    let block = created.body["id"].as_i64().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/notes/{other}/blocks/{block}"),
            Some(json!({ "content": { "text": "stolen" } })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let listed = app
        .request("GET", &format!("/notes/{note}/blocks"), None)
        .await;
    assert_eq!(listed.body[0]["content"]["text"], "mine");
}

#[tokio::test]
async fn test_delete_block_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let note = app.create_note(folder, "Todo", None).await;
    let created = create_block(
        &app,
        note,
        json!({ "type": "text", "content": { "text": "bye" } }),
    )
    .await;
    let block = created.body["id"].as_i64().expect("id");
    let path = format!("/notes/{note}/blocks/{block}");

    assert_eq!(
        app.request("DELETE", &path, None).await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.request("DELETE", &path, None).await.status,
        StatusCode::NO_CONTENT
    );

    let listed = app
        .request("GET", &format!("/notes/{note}/blocks"), None)
        .await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_deleting_note_or_folder_removes_blocks() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("Work").await;
    let first = app.create_note(folder, "First", None).await;
    let second = app.create_note(folder, "Second", None).await;
    for note in [first, second] {
        create_block(
            &app,
            note,
            json!({ "type": "text", "content": { "text": "x" } }),
        )
        .await;
    }

    app.request("DELETE", &format!("/notes/{first}"), None)
        .await;
    let listed = app
        .request("GET", &format!("/notes/{first}/blocks"), None)
        .await;
    assert_eq!(listed.body, json!([]));

    app.request("DELETE", &format!("/folders/{folder}"), None)
        .await;
    let listed = app
        .request("GET", &format!("/notes/{second}/blocks"), None)
        .await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_non_numeric_block_id_is_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app.request("DELETE", "/notes/1/blocks/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
