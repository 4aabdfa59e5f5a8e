//! Web API Listing Tests
//!
//! Integration tests for `GET /list-uploads` and `GET /uploads-page`.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, files_form};
use serde_json::{json, Value};

// ============================================================================
// JSON Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_uploads_empty() {
    let app = create_test_app();

    let response = app.server.get("/list-uploads").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_uploads_after_upload_resolves_to_content() {
    let app = create_test_app();
    let content = b"%PDF-1.4 quarterly numbers";

    let upload = app
        .server
        .post("/upload")
        .multipart(files_form(&[("report.pdf", content)]))
        .await;
    upload.assert_status_ok();
    let stored_name = upload.json::<Value>()["files"][0]["filename"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.server.get("/list-uploads").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], stored_name.as_str());

    let url = entries[0]["url"].as_str().unwrap();
    assert_eq!(url, format!("/uploads/{stored_name}"));

    let served = app.server.get(url).await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().as_ref(), content);
}

#[tokio::test]
async fn test_list_uploads_includes_foreign_entries() {
    let app = create_test_app();
    std::fs::write(app.uploads.path().join("manual.txt"), "placed by hand").unwrap();
    std::fs::create_dir(app.uploads.path().join("nested")).unwrap();

    let response = app.server.get("/list-uploads").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            { "name": "manual.txt", "url": "/uploads/manual.txt" },
            { "name": "nested", "url": "/uploads/nested" }
        ])
    );
}

#[tokio::test]
async fn test_list_uploads_sorted_by_name() {
    let app = create_test_app();
    for name in ["1700000000300-c.txt", "1700000000100-a.txt", "1700000000200-b.txt"] {
        std::fs::write(app.uploads.path().join(name), name).unwrap();
    }

    let body: Value = app.server.get("/list-uploads").await.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec!["1700000000100-a.txt", "1700000000200-b.txt", "1700000000300-c.txt"]
    );
}

#[tokio::test]
async fn test_list_uploads_encodes_urls() {
    let app = create_test_app();
    std::fs::write(app.uploads.path().join("1-my notes.txt"), "notes").unwrap();

    let body: Value = app.server.get("/list-uploads").await.json();

    assert_eq!(body[0]["name"], "1-my notes.txt");
    assert_eq!(body[0]["url"], "/uploads/1-my%20notes.txt");

    let served = app.server.get("/uploads/1-my%20notes.txt").await;
    served.assert_status_ok();
    assert_eq!(served.text(), "notes");
}

#[tokio::test]
async fn test_list_uploads_unreadable_directory() {
    let app = create_test_app();
    std::fs::remove_dir_all(app.uploads.path()).unwrap();

    let response = app.server.get("/list-uploads").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Cannot read uploads folder" }));
}

// ============================================================================
// HTML Viewer Tests
// ============================================================================

#[tokio::test]
async fn test_uploads_page_lists_links() {
    let app = create_test_app();
    std::fs::write(app.uploads.path().join("1700000000000-a.txt"), "a").unwrap();

    let response = app.server.get("/uploads-page").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("<h1>Uploaded Files</h1>"));
    assert!(html.contains(
        r#"<li><a href="/uploads/1700000000000-a.txt" target="_blank">1700000000000-a.txt</a></li>"#
    ));
    assert!(html.contains(r#"<a href="/">Go Back to Upload Form</a>"#));
}

#[tokio::test]
async fn test_uploads_page_empty() {
    let app = create_test_app();

    let response = app.server.get("/uploads-page").await;

    response.assert_status_ok();
    assert!(response.text().contains("<ul></ul>"));
}

#[tokio::test]
async fn test_uploads_page_unreadable_directory() {
    let app = create_test_app();
    std::fs::remove_dir_all(app.uploads.path()).unwrap();

    let response = app.server.get("/uploads-page").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Cannot read uploads folder");
}
