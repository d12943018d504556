//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenService;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    /// Prefix joined with a code to build the public short URL.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(shorten_service: Arc<ShortenService>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            shorten_service,
            base_url: base_url.into(),
        }
    }
}
