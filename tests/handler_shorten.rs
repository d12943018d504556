mod common;

use axum_test::TestServer;
use serde_json::json;
use shortlink::domain::repositories::UrlStore;
use shortlink::infrastructure::persistence::InMemoryUrlStore;
use shortlink::utils::code_generator::{CodeGenerator, SeededCodeGenerator};
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_success() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/page1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["original_url"], "https://example.com/page1");
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_URL, code));

    let stored = store.get(code).await.unwrap().unwrap();
    assert_eq!(stored.original_url, "https://example.com/page1");
}

#[tokio::test]
async fn test_shorten_api_path() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["code"].is_string());
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_two_codes() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let first = server
        .post("/")
        .json(&json!({ "url": "https://example.com/dup" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/")
        .json(&json!({ "url": "https://example.com/dup" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["code"], second["code"]);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_stores_url_verbatim() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();
    let url = "not a url at all <script>";

    let json = server
        .post("/")
        .json(&json!({ "url": url }))
        .await
        .json::<serde_json::Value>();

    let code = json["code"].as_str().unwrap();
    assert_eq!(store.get(code).await.unwrap().unwrap().original_url, url);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.post("/").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_url_with_nul() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/\u{0000}page" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.post("/").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_shorten_code_space_exhausted() {
    let store = Arc::new(InMemoryUrlStore::new());
    let preview = SeededCodeGenerator::new(99, 6);
    for _ in 0..10 {
        store.put(&preview.generate(), "https://taken.example").await.unwrap();
    }

    let state = common::create_test_state_with(
        store.clone(),
        Arc::new(SeededCodeGenerator::new(99, 6)),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "code_space_exhausted");
    assert_eq!(json["error"]["details"]["attempts"], 5);
    assert_eq!(store.len(), 10);
}
