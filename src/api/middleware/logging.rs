//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Middleware to log HTTP requests and responses.
/// Note: no span is opened here; `TraceLayer` from tower-http already owns
/// the request span.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let content_type = header_value(&request, header::CONTENT_TYPE.as_str());

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        content_type = %content_type,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

/// Route template when matched (`/users/{id}`), raw path otherwise
fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn header_value(request: &Request<Body>, name: &str) -> String {
    request
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap_or("[invalid]").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_request_id_from_header() {
        let request = Request::builder()
            .uri("/users/abc")
            .header("x-request-id", "req-123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_request_id(&request), "req-123");
    }

    #[test]
    fn test_extract_request_id_generated() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let id = extract_request_id(&request);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_extract_path_falls_back_to_uri() {
        let request = Request::builder()
            .uri("/users/abc?x=1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_path(&request), "/users/abc");
    }

    #[test]
    fn test_header_value() {
        let request = Request::builder()
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::empty())
            .unwrap();

        assert_eq!(header_value(&request, "content-type"), "application/json");
        assert_eq!(header_value(&request, "user-agent"), "-");
    }
}
