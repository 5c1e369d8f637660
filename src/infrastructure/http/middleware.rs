//! HTTP Middleware
//!
//! 请求状态日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 请求状态日志中间件
///
/// 5xx 记 error，4xx 记 warn，其余记 debug
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP request"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::{get, post},
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/people", get(|| async { "[]" }))
            .route("/people/:id", get(|| async { StatusCode::NOT_FOUND }))
            .route("/planets", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        create_test_router()
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_passes_success_through() {
        assert_eq!(status_of("GET", "/people").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_passes_client_error_through() {
        assert_eq!(status_of("GET", "/people/9").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_passes_server_error_through() {
        assert_eq!(
            status_of("POST", "/planets").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unmatched_method_is_logged_as_client_error() {
        assert_eq!(
            status_of("DELETE", "/people").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
