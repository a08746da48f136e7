//! HTTP middleware module.
//!
//! ```ignore
//! use axum_helpers::http::create_open_cors_layer;
//!
//! let app = Router::new().layer(create_open_cors_layer());
//! ```

pub mod cors;

pub use cors::create_open_cors_layer;
