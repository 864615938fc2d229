//! Request correlation and logging middleware

use crate::api::constants::X_REQUEST_ID;
use crate::infrastructure::log_messages::requests;
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Request ID middleware - ensures every request has a unique ID for tracing.
///
/// A well-formed incoming UUID is kept; anything else is replaced with a
/// fresh UUID v7. The id is echoed on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::now_v7);

    let header_value = HeaderValue::from_str(&request_id.to_string()).ok();

    if let Some(value) = &header_value {
        request.headers_mut().insert(X_REQUEST_ID, value.clone());
    }

    let mut response = next.run(request).await;

    if let Some(value) = header_value {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }

    response
}

/// Logging middleware - logs request/response details with timing
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        "{}",
        requests::INCOMING
    );

    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        status = response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "{}",
        requests::COMPLETED
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware::from_fn, routing::get, Router};
    use tower::ServiceExt;

    /// Router whose handler echoes the request id it observed in the body
    fn echo_router() -> Router {
        Router::new()
            .route(
                "/echo",
                get(|request: Request| async move {
                    request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("missing")
                        .to_string()
                }),
            )
            .layer(from_fn(logging_middleware))
            .layer(from_fn(request_id_middleware))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_request_id_generation() {
        let request = Request::builder().uri("/echo").body(Body::empty()).unwrap();

        let response = echo_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response
            .headers()
            .get(X_REQUEST_ID)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let uuid = Uuid::parse_str(&header).unwrap();
        assert_eq!(uuid.get_version_num(), 7);
        assert_eq!(body_text(response).await, header);
    }

    #[tokio::test]
    async fn test_existing_request_id_preserved() {
        let existing = Uuid::now_v7().to_string();
        let request = Request::builder()
            .uri("/echo")
            .header(X_REQUEST_ID, &existing)
            .body(Body::empty())
            .unwrap();

        let response = echo_router().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get(X_REQUEST_ID).unwrap(), existing.as_str());
        assert_eq!(body_text(response).await, existing);
    }

    #[tokio::test]
    async fn test_malformed_request_id_replaced() {
        let request = Request::builder()
            .uri("/echo")
            .header(X_REQUEST_ID, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = echo_router().oneshot(request).await.unwrap();

        let header = response.headers().get(X_REQUEST_ID).unwrap().to_str().unwrap();
        assert_ne!(header, "not-a-uuid");
        assert!(Uuid::parse_str(header).is_ok());
    }
}
