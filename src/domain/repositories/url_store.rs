//! Store trait for URL mappings.

use crate::domain::entities::{PutOutcome, UrlMapping};
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable code → URL storage.
///
/// Uniqueness of `code` is enforced by the backing store itself, so two
/// concurrent `put` calls with the same code yield exactly one
/// [`PutOutcome::Created`] and one [`PutOutcome::AlreadyExists`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlStore`] - In-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url_store.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Creates the `urls` collection and its unique index if missing.
    ///
    /// Idempotent: calling it on every process start is expected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backing store cannot be reached.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Inserts a mapping unless `code` is already taken.
    ///
    /// A taken code is reported as [`PutOutcome::AlreadyExists`] and the
    /// existing URL is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on connection or database errors.
    async fn put(&self, code: &str, original_url: &str) -> Result<PutOutcome, StoreError>;

    /// Looks up a mapping by code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on connection or database errors.
    async fn get(&self, code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Checks that the backing store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}
