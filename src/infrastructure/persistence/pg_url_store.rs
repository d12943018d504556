//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domain::entities::{PutOutcome, UrlMapping};
use crate::domain::repositories::UrlStore;
use crate::error::StoreError;

const CREATE_URLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        id SERIAL PRIMARY KEY,
        code VARCHAR(255) UNIQUE NOT NULL,
        original_url TEXT NOT NULL
    )
"#;

/// PostgreSQL store for URL mappings.
///
/// Every operation is a single statement on a pooled connection; the pool
/// returns the connection on every exit path. Uniqueness relies on the
/// `UNIQUE` constraint on `urls.code`.
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a connection pool using the pool settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if no database URL is configured or
    /// the first connection cannot be established.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let database_url = config
            .database_url
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("database URL is not configured".into()))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
            .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
            .connect(database_url)
            .await?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

fn map_row(row: PgRow) -> Result<UrlMapping, StoreError> {
    let id: i32 = row.try_get("id")?;
    let code: String = row.try_get("code")?;
    let original_url: String = row.try_get("original_url")?;

    Ok(UrlMapping::new(i64::from(id), code, original_url))
}

#[async_trait]
impl UrlStore for PgUrlStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_URLS_TABLE)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn put(&self, code: &str, original_url: &str) -> Result<PutOutcome, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO urls (code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            RETURNING id, code, original_url
            "#,
        )
        .bind(code)
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(PutOutcome::Created(map_row(row)?)),
            None => Ok(PutOutcome::AlreadyExists),
        }
    }

    async fn get(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        // TEXT columns cannot hold NUL, so no stored code matches
        if code.contains('\0') {
            return Ok(None);
        }

        let row = sqlx::query("SELECT id, code, original_url FROM urls WHERE code = $1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(map_row).transpose()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
