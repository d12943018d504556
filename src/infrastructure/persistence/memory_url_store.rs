//! In-process URL store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{PutOutcome, UrlMapping};
use crate::domain::repositories::UrlStore;
use crate::error::StoreError;

/// Map-backed store for local runs and tests.
///
/// Insert-if-absent goes through the `DashMap` entry API, which holds the
/// shard lock for the key, so same-code races resolve to a single winner.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    entries: DashMap<String, UrlMapping>,
    next_id: AtomicI64,
}

impl InMemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn put(&self, code: &str, original_url: &str) -> Result<PutOutcome, StoreError> {
        match self.entries.entry(code.to_owned()) {
            Entry::Occupied(_) => Ok(PutOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let mapping = UrlMapping::new(id, code, original_url);
                slot.insert(mapping.clone());
                Ok(PutOutcome::Created(mapping))
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.entries.get(code).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
