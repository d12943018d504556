#![allow(dead_code)]

use axum::Router;
use shortlink::api::routes::public_routes;
use shortlink::application::services::{DEFAULT_MAX_ATTEMPTS, ShortenService};
use shortlink::domain::repositories::UrlStore;
use shortlink::infrastructure::persistence::InMemoryUrlStore;
use shortlink::state::AppState;
use shortlink::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

pub fn create_test_state_with(
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    let service = Arc::new(ShortenService::new(store, generator, DEFAULT_MAX_ATTEMPTS));
    AppState::new(service, BASE_URL)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlStore>) {
    let store = Arc::new(InMemoryUrlStore::new());
    let state = create_test_state_with(store.clone(), Arc::new(RandomCodeGenerator::default()));
    (state, store)
}

pub fn create_test_app(state: AppState) -> Router {
    public_routes().with_state(state)
}

pub async fn create_test_mapping(store: &InMemoryUrlStore, code: &str, url: &str) {
    store.put(code, url).await.unwrap();
}
