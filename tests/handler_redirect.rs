mod common;

use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    common::create_test_mapping(&store, "test12", "https://example.com/target").await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/test12").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert!(response.text().contains("Redirecting"));
}

#[tokio::test]
async fn test_redirect_query_success() {
    let (state, store) = common::create_test_state();
    common::create_test_mapping(&store, "test123", "https://www.google.com").await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/redirect").add_query_param("code", "test123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.google.com");
}

#[tokio::test]
async fn test_redirect_page_escapes_url() {
    let (state, store) = common::create_test_state();
    common::create_test_mapping(&store, "xss001", "https://example.com/?q='><script>").await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/xss001").await;

    assert_eq!(response.status_code(), 302);
    let body = response.text();
    assert!(!body.contains("'><script>"));
    assert!(body.contains("&#60;script&#62;"));
}

#[tokio::test]
async fn test_redirect_nul_code_not_found() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/redirect?code=ab%00cd").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "doesnotexist");
}

#[tokio::test]
async fn test_redirect_query_missing_code() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/redirect").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Missing URL code");
}

#[tokio::test]
async fn test_redirect_query_empty_code() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/redirect")
        .add_query_param("code", "")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_then_redirect_end_to_end() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let created = server
        .post("/")
        .json(&json!({ "url": "https://example.com/page1" }))
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap();

    let response = server.get(&format!("/{}", code)).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/page1");

    server
        .get("/doesnotexist")
        .await
        .assert_status_not_found();
}
