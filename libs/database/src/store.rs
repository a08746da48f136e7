//! Document store abstraction.
//!
//! Collections are schemaless: callers hand over BSON documents and get BSON documents
//! back. Typed records are mapped at the domain layer with `bson::to_document` /
//! `bson::from_document`, which is why encode and decode failures live in
//! [`StoreError`] too.

use async_trait::async_trait;
use mongodb::bson::{self, Document};
use thiserror::Error;

/// Errors raised by a [`DocumentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No database handle was established at startup.
    #[error("Database not available: {0}")]
    Unavailable(String),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal insert/find accessor over named collections.
///
/// Implementations never retry; a failed call is reported once to the caller.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection` and return the assigned identifier as a string.
    async fn create_document(&self, collection: &str, document: Document) -> StoreResult<String>;

    /// Return at most `limit` documents matching the equality `filter`, in store order.
    ///
    /// An empty filter matches every document.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>>;

    /// Return the first document matching `filter`, if any.
    async fn find_document(&self, collection: &str, filter: Document)
    -> StoreResult<Option<Document>>;
}
