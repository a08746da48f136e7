//! API routes module
//!
//! Root routes (`/`, `/test`) are mounted as-is; domain routes are nested under
//! `/api` by `axum_helpers::create_router`.

pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Routes served at the root of the application
pub fn root_routes(state: &AppState) -> Router {
    health::router(state.clone())
}

/// Domain API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(events::router(state))
}
