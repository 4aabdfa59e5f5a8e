//! Upload listing handlers: JSON listing and HTML viewer.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::file::StoredFile;
use crate::web::dto::{MessageResponse, UploadListEntry};
use crate::web::error::ApiError;

/// Message returned when the upload directory cannot be read.
pub const READ_ERROR_MESSAGE: &str = "Cannot read uploads folder";

/// GET /list-uploads - List every entry of the upload directory.
#[utoipa::path(
    get,
    path = "/list-uploads",
    tag = "Uploads",
    responses(
        (status = 200, description = "Upload directory entries", body = Vec<UploadListEntry>),
        (status = 500, description = "Upload directory unreadable", body = MessageResponse)
    )
)]
pub async fn list_uploads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UploadListEntry>>, ApiError> {
    let files = state.store.list().await.map_err(|e| {
        tracing::error!("Failed to read upload directory: {}", e);
        ApiError::internal(READ_ERROR_MESSAGE)
    })?;

    Ok(Json(files.into_iter().map(UploadListEntry::from).collect()))
}

/// GET /uploads-page - HTML page linking every uploaded file.
#[utoipa::path(
    get,
    path = "/uploads-page",
    tag = "Uploads",
    responses(
        (status = 200, description = "HTML list of uploads", body = String, content_type = "text/html"),
        (status = 500, description = "Upload directory unreadable", body = String, content_type = "text/plain")
    )
)]
pub async fn uploads_page(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list().await {
        Ok(files) => Html(render_uploads_page(&files)).into_response(),
        Err(e) => {
            tracing::error!("Failed to read upload directory: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, READ_ERROR_MESSAGE).into_response()
        }
    }
}

/// Render the uploads page for `files`.
pub fn render_uploads_page(files: &[StoredFile]) -> String {
    let links = files
        .iter()
        .map(|f| {
            format!(
                r#"<li><a href="{}" target="_blank">{}</a></li>"#,
                escape_html(&f.url),
                escape_html(&f.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Uploaded Files</title></head>
  <body>
    <h1>Uploaded Files</h1>
    <ul>{links}</ul>
    <a href="/">Go Back to Upload Form</a>
  </body>
</html>
"#
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
