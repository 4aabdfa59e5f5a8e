//! OpenAPI document for the JSON endpoints.

use axum::Json;
use utoipa::OpenApi;

use super::dto::{MessageResponse, UploadListEntry, UploadResponse, UploadedFile};
use super::handlers;

/// OpenAPI document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filedrop",
        description = "Multipart file upload server"
    ),
    paths(
        handlers::upload::upload_files,
        handlers::listing::list_uploads,
        handlers::listing::uploads_page,
        handlers::health::hello,
    ),
    components(schemas(MessageResponse, UploadedFile, UploadResponse, UploadListEntry)),
    tags(
        (name = "Uploads", description = "Upload, list and view stored files"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
