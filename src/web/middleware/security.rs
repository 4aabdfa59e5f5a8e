//! Security headers middleware.

use axum::{
    body::Body,
    http::{
        header::{self, HeaderValue},
        Request,
    },
    middleware::Next,
    response::Response,
};

use crate::file::UPLOADS_URL_PREFIX;

/// Add security headers to every response.
///
/// Responses under `/uploads/` also get `Content-Security-Policy: sandbox`,
/// so stored HTML cannot run scripts in the application origin.
pub async fn security_headers(req: Request<Body>, next: Next) -> Response {
    let is_upload = is_upload_path(req.uri().path());
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if is_upload {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("sandbox"),
        );
    }

    response
}

fn is_upload_path(path: &str) -> bool {
    path.strip_prefix(UPLOADS_URL_PREFIX)
        .is_some_and(|rest| rest.starts_with('/'))
}
