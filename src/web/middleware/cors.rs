//! CORS middleware configuration.

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Create a CORS layer from configured origins.
///
/// Returns `None` when no valid origin is configured: the frontend is served
/// from the same origin and needs no CORS.
pub fn create_cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    if parsed_origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_methods([Method::GET, Method::HEAD, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, ACCEPT])
            .allow_origin(parsed_origins),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_layer_empty_origins() {
        assert!(create_cors_layer(&[]).is_none());
    }

    #[test]
    fn test_create_cors_layer_invalid_origins() {
        assert!(create_cors_layer(&["bad\norigin".to_string()]).is_none());
    }

    #[test]
    fn test_create_cors_layer_with_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
        ];
        assert!(create_cors_layer(&origins).is_some());
    }
}
