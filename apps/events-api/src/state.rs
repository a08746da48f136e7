//! Application state management.
//!
//! This module defines the shared application state passed to the root handlers.
//! The state contains:
//! - Configuration
//! - MongoDB handle

use database::mongodb::MongoHandle;

/// Shared application state.
///
/// Cloned for each handler; the MongoDB client inside the handle shares one
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Connected or unavailable MongoDB handle, established once at startup
    pub handle: MongoHandle,
}
