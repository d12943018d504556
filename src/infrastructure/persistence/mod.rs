//! URL store implementations.
//!
//! - [`PgUrlStore`] - PostgreSQL storage via SQLx
//! - [`InMemoryUrlStore`] - `DashMap`-backed storage for local runs and tests

pub mod memory_url_store;
pub mod pg_url_store;

pub use memory_url_store::InMemoryUrlStore;
pub use pg_url_store::PgUrlStore;
