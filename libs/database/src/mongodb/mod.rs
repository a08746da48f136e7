//! MongoDB database connector and utilities
//!
//! Provides connection setup, the process-wide [`MongoHandle`], the
//! [`MongoDocumentStore`] accessor and diagnostics helpers.

mod config;
mod connector;
mod handle;
mod health;
mod store;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, connect_from_config};
pub use handle::MongoHandle;
pub use health::{HealthStatus, check_health_detailed, list_collections};
pub use store::MongoDocumentStore;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Database, bson};
