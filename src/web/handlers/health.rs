//! Liveness handlers.

/// GET /get - Fixed greeting used as a liveness probe.
#[utoipa::path(
    get,
    path = "/get",
    tag = "Health",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hello() -> &'static str {
    "hello world"
}

/// GET /health - Health check.
pub async fn health_check() -> &'static str {
    "OK"
}
