//! Core domain entities.
//!
//! - [`UrlMapping`] - A short code and its original URL
//! - [`PutOutcome`] - Result of an insert-if-absent attempt

pub mod url_mapping;

pub use url_mapping::{PutOutcome, UrlMapping};
