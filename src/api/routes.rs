//! API route configuration.

use crate::api::handlers::{
    health_handler, redirect_handler, redirect_query_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /`              - Create a short code (JSON `{"url": ...}`)
/// - `POST /api/shorten`   - Same as `POST /`
/// - `GET  /redirect`      - Redirect by `?code=` query parameter
/// - `GET  /health`        - Store connectivity check
/// - `GET  /{code}`        - Redirect by path
///
/// Static segments win over `/{code}`, so a stored code equal to `health` or
/// `redirect` is only reachable through `/redirect?code=`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/redirect", get(redirect_query_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
