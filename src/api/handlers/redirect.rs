//! Handlers for short URL redirect.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::api::dto::redirect::{RedirectQuery, RedirectTemplate};
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code given in the path.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// - 404 Not Found if the code doesn't exist
/// - 503 Service Unavailable if the store cannot be reached
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, &code).await
}

/// Redirects a short code given as a query parameter.
///
/// # Endpoint
///
/// `GET /redirect?code={code}`
///
/// # Errors
///
/// - 400 Bad Request if `code` is missing or empty
/// - 404 Not Found if the code doesn't exist
/// - 503 Service Unavailable if the store cannot be reached
pub async fn redirect_query_handler(
    Query(query): Query<RedirectQuery>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let code = query
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing URL code", json!({})))?;

    redirect_to(&state, &code).await
}

/// Resolves `code` and answers `302 Found` with a meta-refresh fallback page.
async fn redirect_to(state: &AppState, code: &str) -> Result<Response, AppError> {
    let mapping = state.shorten_service.resolve(code).await?;
    debug!(code, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url.clone())],
        RedirectTemplate {
            url: mapping.original_url,
        },
    )
        .into_response())
}
