mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use shortlink::domain::entities::{PutOutcome, UrlMapping};
use shortlink::domain::repositories::UrlStore;
use shortlink::error::StoreError;
use shortlink::utils::code_generator::RandomCodeGenerator;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

struct UnreachableStore;

#[async_trait::async_trait]
impl UrlStore for UnreachableStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn put(&self, _code: &str, _original_url: &str) -> Result<PutOutcome, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn get(&self, _code: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let state = common::create_test_state_with(
        Arc::new(UnreachableStore),
        Arc::new(RandomCodeGenerator::default()),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert_eq!(json["checks"]["store"]["message"], "Store unreachable");
}

#[tokio::test]
async fn test_shorten_with_store_down() {
    let state = common::create_test_state_with(
        Arc::new(UnreachableStore),
        Arc::new(RandomCodeGenerator::default()),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&serde_json::json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
    assert_eq!(json["error"]["details"], serde_json::json!({}));
}
