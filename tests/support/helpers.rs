// tests/support/helpers.rs
use account_core::application::ports::security::PasswordHasher;
use account_core::application::services::ApplicationServices;
use account_core::infrastructure::repositories::InMemoryAccountRepository;
use account_core::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;

use super::mocks;

/// Router backed by an in-memory store and the deterministic prefix hasher.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryAccountRepository>) {
    make_test_router_with_hasher(Arc::new(mocks::PrefixPasswordHasher))
}

pub fn make_test_router_with_hasher(
    password_hasher: Arc<dyn PasswordHasher>,
) -> (axum::Router, Arc<InMemoryAccountRepository>) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let services = Arc::new(ApplicationServices::new(repo.clone(), password_hasher));
    let state = HttpState { services };

    let origins = vec!["http://localhost:3000".to_string()];
    (build_router(state, &origins), repo)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an error body with the expected status and
/// `error` field, and return its message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    msg_field.to_string()
}
