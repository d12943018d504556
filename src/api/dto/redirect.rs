//! DTOs for the redirect endpoints.

use askama::Template;
use askama_web::WebTemplate;
use serde::Deserialize;

/// Query string of `GET /redirect?code=...`.
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub code: Option<String>,
}

/// Fallback page for clients that ignore the `Location` header.
///
/// Renders `templates/redirect.html`; the URL is HTML-escaped.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub url: String,
}
