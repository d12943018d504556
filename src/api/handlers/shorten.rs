//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenService;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /` or `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page1" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aZ09xY",
///   "short_url": "https://s.example.com/aZ09xY",
///   "original_url": "https://example.com/page1"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL is empty
/// - 500 Internal Server Error if every generated code collided
/// - 503 Service Unavailable if the store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let mapping = state.shorten_service.shorten(&payload.url).await?;
    let short_url = ShortenService::short_url(&state.base_url, &mapping.code);

    Ok(Json(ShortenResponse {
        code: mapping.code,
        short_url,
        original_url: mapping.original_url,
    }))
}
