//! Shorten and resolve workflows.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::{PutOutcome, UrlMapping};
use crate::domain::repositories::UrlStore;
use crate::error::{AppError, StoreError};
use crate::utils::code_generator::CodeGenerator;

/// Default bound on `put` attempts per shorten request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for creating and resolving short codes.
///
/// Composes a [`CodeGenerator`] with a [`UrlStore`]. Random codes can collide
/// with stored ones, so [`Self::shorten`] regenerates on
/// [`PutOutcome::AlreadyExists`] up to `max_attempts` times. Store failures
/// are returned as-is and never retried here.
pub struct ShortenService {
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// A `max_attempts` of zero is treated as one.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Stores `original_url` under a freshly generated code.
    ///
    /// # Flow
    ///
    /// 1. Generate a candidate code
    /// 2. `put` it; on success, return the mapping
    /// 3. On collision, go back to 1 until `max_attempts` puts were made
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty or contains NUL.
    /// Returns [`AppError::CodeSpaceExhausted`] if every attempt collided.
    /// Returns [`AppError::StoreUnavailable`] on store failure.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request("URL must not be empty", json!({})));
        }
        if original_url.contains('\0') {
            return Err(AppError::bad_request(
                "URL must not contain NUL characters",
                json!({}),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            match self.store.put(&code, original_url).await? {
                PutOutcome::Created(mapping) => {
                    debug!(code = %mapping.code, attempt, "Short code created");
                    return Ok(mapping);
                }
                PutOutcome::AlreadyExists => {
                    warn!(%code, attempt, max_attempts = self.max_attempts, "Short code collision");
                }
            }
        }

        error!(
            attempts = self.max_attempts,
            code_length = self.generator.length(),
            "Failed to generate unique code"
        );

        Err(AppError::code_space_exhausted(
            "Failed to generate unique code",
            json!({
                "attempts": self.max_attempts,
                "code_length": self.generator.length(),
            }),
        ))
    }

    /// Retrieves the mapping for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `code`.
    /// Returns [`AppError::StoreUnavailable`] on store failure.
    pub async fn resolve(&self, code: &str) -> Result<UrlMapping, AppError> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Checks store connectivity.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn short_url(base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
