//! Events API routes
//!
//! Wires the events domain to the MongoDB document store.

use crate::state::AppState;
use axum::Router;
use database::mongodb::MongoDocumentStore;
use domain_events::{EventService, handlers};

/// Create the events router (`/events`, `/rsvps`)
pub fn router(state: &AppState) -> Router {
    let store = MongoDocumentStore::new(state.handle.clone());
    let service = EventService::new(store);

    handlers::router(service)
}
