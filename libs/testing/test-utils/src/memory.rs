//! In-memory document store
//!
//! Mirrors the observable behavior of the MongoDB store: generated ObjectId
//! identifiers, equality filters, insertion order and the `limit` cap.

use async_trait::async_trait;
use database::mongodb::bson::{Document, oid::ObjectId};
use database::{DocumentStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable in-memory `DocumentStore`; clones share the same collections.
///
/// # Example
///
/// ```no_run
/// use test_utils::MemoryDocumentStore;
///
/// let store = MemoryDocumentStore::new();
/// let outage = MemoryDocumentStore::unavailable("connection refused");
/// ```
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    failure: Option<String>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `StoreError::Unavailable(reason)`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of documents currently stored in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .map_or(0, Vec::len)
    }

    fn check_available(&self) -> StoreResult<()> {
        match &self.failure {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn matches(document: &Document, filter: &Document) -> bool {
        filter
            .iter()
            .all(|(key, value)| document.get(key) == Some(value))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(&self, collection: &str, document: Document) -> StoreResult<String> {
        self.check_available()?;

        let id = ObjectId::new();
        let mut stored = Document::new();
        stored.insert("_id", id);
        stored.extend(document.into_iter().filter(|(key, _)| key != "_id"));

        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        self.check_available()?;

        let collections = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // Negative limits return |limit| documents like MongoDB; zero means no limit
        let cap = match limit.unsigned_abs() {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        Ok(documents
            .iter()
            .filter(|document| Self::matches(document, &filter))
            .take(cap)
            .cloned()
            .collect())
    }

    async fn find_document(
        &self,
        collection: &str,
        filter: Document,
    ) -> StoreResult<Option<Document>> {
        self.check_available()?;

        let collections = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        Ok(collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| Self::matches(document, &filter))
                .cloned()
        }))
    }
}
