//! UrlMapping entity: a short code and the URL it stands for.

/// A stored (code, URL) pair.
///
/// Both `code` and `original_url` are immutable once the mapping exists.
/// `original_url` is kept byte-for-byte as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    /// Surrogate key assigned by the store.
    pub id: i64,
    pub code: String,
    pub original_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            original_url: original_url.into(),
        }
    }
}

/// Result of an insert-if-absent attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    /// The mapping was inserted.
    Created(UrlMapping),
    /// The code is already taken; the stored URL was left untouched.
    AlreadyExists,
}

impl PutOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, PutOutcome::Created(_))
    }
}
