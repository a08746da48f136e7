//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with OpenAPI docs, graceful shutdown
//! - **[`http`]**: CORS configuration
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Validated JSON extractor
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new());
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {})
//!         .await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    OPENAPI_JSON_PATH, ShutdownCoordinator, create_production_app, create_router,
    shutdown_signal,
};

// Re-export HTTP middleware
pub use http::create_open_cors_layer;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse, MAX_ERROR_MESSAGE_CHARS, truncate_message};

// Re-export extractors
pub use extractors::ValidatedJson;
