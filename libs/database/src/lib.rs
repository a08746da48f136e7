//! Database library providing the document store seam and its MongoDB backend.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, handle and [`DocumentStore`] implementation
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - Everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, MongoDocumentStore, MongoHandle};
//! use database::DocumentStore;
//! use mongodb::bson::doc;
//!
//! let config = MongoConfig::new("mongodb://localhost:27017").with_database("events");
//! let handle = MongoHandle::establish(Some(&config)).await;
//! let store = MongoDocumentStore::new(handle);
//!
//! let id = store.create_document("event", doc! { "name": "Launch" }).await?;
//! let docs = store.get_documents("event", doc! {}, 100).await?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(feature = "mongodb")]
pub mod store;

#[cfg(feature = "mongodb")]
pub use store::{DocumentStore, StoreError, StoreResult};
