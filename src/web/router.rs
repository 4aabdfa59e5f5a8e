//! Router configuration for the Filedrop web layer.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_check, hello, list_uploads, upload_body_limit, upload_files, uploads_page, AppState,
};
use super::middleware::{create_cors_layer, security_headers};
use super::openapi::openapi_json;
use crate::file::UPLOADS_URL_PREFIX;

/// Create the application router.
///
/// Routes:
/// - `POST /upload`, `GET /list-uploads`, `GET /uploads-page`
/// - `GET /upload` serves the frontend entry page
/// - `GET /uploads/<name>` served from the upload directory
/// - `GET /get`, `GET /health`, `GET /api-docs/openapi.json`
/// - anything else falls back to the frontend bundle in `frontend_dir`
pub fn create_router(
    app_state: Arc<AppState>,
    frontend_dir: impl AsRef<Path>,
    cors_origins: &[String],
) -> Router {
    let frontend_dir = frontend_dir.as_ref();
    let body_limit = upload_body_limit(app_state.max_files, app_state.max_file_size);
    let uploads_dir = app_state.store.base_path().to_path_buf();

    // Other methods on /upload go to the frontend like any unmatched page
    let upload_routes = Router::new()
        .route(
            "/upload",
            post(upload_files)
                .layer(DefaultBodyLimit::max(body_limit))
                .fallback_service(create_frontend_service(frontend_dir)),
        )
        .route("/list-uploads", get(list_uploads))
        .route("/uploads-page", get(uploads_page))
        .with_state(app_state);

    let router = Router::new()
        .merge(upload_routes)
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(uploads_dir))
        .route("/get", get(hello))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(create_health_router())
        .fallback_service(create_frontend_service(frontend_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers)),
        );

    match create_cors_layer(cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Serve the frontend bundle, answering unknown paths with its `index.html`.
pub fn create_frontend_service(frontend_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")))
}
