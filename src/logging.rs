//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;

/// Bodies longer than this many bytes are truncated in `info` logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Request bodies larger than this many bytes are rejected with 413 Payload Too Large.
///
/// Matches axum's `DefaultBodyLimit`.
pub const REQUEST_BODY_SIZE_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full text is logged at the `debug` level.
///
/// Bodies are passed on as the original bytes. Request bodies over
/// [REQUEST_BODY_SIZE_LIMIT] bytes never reach the handler.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let body_bytes = match to_bytes(body, REQUEST_BODY_SIZE_LIMIT).await {
        Ok(bytes) => bytes,
        Err(error) => {
            let is_too_large = error
                .into_inner()
                .downcast_ref::<LengthLimitError>()
                .is_some();

            return if is_too_large {
                tracing::info!(
                    "Rejected request: {} {}\nbody larger than {REQUEST_BODY_SIZE_LIMIT} bytes",
                    parts.method,
                    parts.uri
                );
                StatusCode::PAYLOAD_TOO_LARGE.into_response()
            } else {
                tracing::error!("could not read request body");
                StatusCode::BAD_REQUEST.into_response()
            };
        }
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = read_response_body(body).await;
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

async fn read_response_body(body: Body) -> Bytes {
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            Bytes::new()
        }
    }
}

/// Cut `body` to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a character.
fn truncate(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate(body)
        );
        tracing::debug!("Full request: {parts:#?}\nbody: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {}\nbody: {}...",
            parts.status,
            truncate(body)
        );
        tracing::debug!("Full response: {parts:#?}\nbody: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}

#[cfg(test)]
mod logging_tests {
    use axum::{
        Router,
        body::Bytes,
        http::StatusCode,
        middleware,
        routing::post,
    };
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::get_logged_test_server;

    use super::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_SIZE_LIMIT, logging_middleware, truncate};

    fn echo_server() -> TestServer {
        let app = Router::new()
            .route("/echo", post(|body: Bytes| async move { body }))
            .layer(middleware::from_fn(logging_middleware));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate("hola"), "hola");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT);

        let truncated = truncate(&body);

        assert!(truncated.len() <= LOG_BODY_LENGTH_LIMIT);
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[tokio::test]
    async fn passes_body_through_unchanged() {
        let server = echo_server();
        let body = "x".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        let response = server.post("/echo").text(body.clone()).await;

        response.assert_text(body);
    }

    #[tokio::test]
    async fn passes_invalid_utf8_bytes_through_unchanged() {
        let server = echo_server();
        let body = Bytes::from_static(b"{\"nombre\": \"Anal\xffgesicos\"}");

        let response = server.post("/echo").bytes(body.clone()).await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes(), &body);
    }

    #[tokio::test]
    async fn rejects_oversized_request_body() {
        let server = echo_server();
        let body = Bytes::from(vec![b'a'; REQUEST_BODY_SIZE_LIMIT + 1]);

        let response = server.post("/echo").bytes(body).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn api_rejects_invalid_utf8_behind_middleware() {
        let server = get_logged_test_server();

        let response = server
            .post("/api/categorias")
            .bytes(Bytes::from_static(b"{\"nombre\": \"Anal\xffgesicos\"}"))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
        server.get("/api/categorias").await.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn api_accepts_utf8_behind_middleware() {
        let server = get_logged_test_server();

        let response = server
            .post("/api/categorias")
            .json(&json!({"nombre": "Analgésicos"}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"id": 1, "nombre": "Analgésicos"}));
    }
}
