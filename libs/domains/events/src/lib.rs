//! Events Domain
//!
//! Events and the RSVPs attendees send for them, persisted in the MongoDB
//! collections `event` and `rsvp` through a [`database::DocumentStore`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/events, /rsvps)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Event existence check, BSON mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │DocumentStore│  ← insert / find over named collections
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{MongoConfig, MongoDocumentStore, MongoHandle};
//! use domain_events::{handlers, service::EventService};
//!
//! # async fn example() {
//! let config = MongoConfig::new("mongodb://localhost:27017/event_planner");
//! let handle = MongoHandle::establish(Some(&config)).await;
//!
//! let service = EventService::new(MongoDocumentStore::new(handle));
//! let router = handlers::router(service);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod timestamp;

pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateEvent, CreateRsvp, CreatedResponse, Event, EventRecord, Rsvp, RsvpFilter, RsvpRecord,
};
pub use service::EventService;
