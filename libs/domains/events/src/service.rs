//! Event Service - Business logic layer

use database::{DocumentStore, StoreError};
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{EventError, EventResult};
use crate::models::{
    CreateEvent, CreateRsvp, CreatedResponse, EVENT_COLLECTION, EVENT_LIST_LIMIT, Event,
    EventRecord, RSVP_COLLECTION, RSVP_LIST_LIMIT, RecordError, Rsvp, RsvpFilter, RsvpRecord,
};

/// Event service providing the event and RSVP operations
///
/// Records are mapped to and from BSON here; the store only sees documents.
pub struct EventService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> EventService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Store a new event and return its id
    #[instrument(skip(self, input), fields(event_name = %input.name))]
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<CreatedResponse> {
        let document = bson::to_document(&EventRecord::from(input)).map_err(StoreError::from)?;
        let id = self.store.create_document(EVENT_COLLECTION, document).await?;

        info!(event_id = %id, "Event created");
        Ok(CreatedResponse { id })
    }

    /// List up to [`EVENT_LIST_LIMIT`] events in store order
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        let documents = self
            .store
            .get_documents(EVENT_COLLECTION, doc! {}, EVENT_LIST_LIMIT)
            .await?;

        Ok(decode_all::<EventRecord, Event>(EVENT_COLLECTION, documents))
    }

    /// Store an RSVP for an existing event and return its id
    ///
    /// `event_id` must parse as an ObjectId and reference a stored event.
    #[instrument(skip(self, input), fields(event_id = %input.event_id, status = %input.status))]
    pub async fn create_rsvp(&self, input: CreateRsvp) -> EventResult<CreatedResponse> {
        let event_oid = ObjectId::parse_str(&input.event_id)
            .map_err(|_| EventError::InvalidEventId(input.event_id.clone()))?;

        let event = self
            .store
            .find_document(EVENT_COLLECTION, doc! { "_id": event_oid })
            .await?;
        if event.is_none() {
            return Err(EventError::EventNotFound(input.event_id));
        }

        let document = bson::to_document(&RsvpRecord::from(input)).map_err(StoreError::from)?;
        let id = self.store.create_document(RSVP_COLLECTION, document).await?;

        info!(rsvp_id = %id, "RSVP created");
        Ok(CreatedResponse { id })
    }

    /// List up to [`RSVP_LIST_LIMIT`] RSVPs, optionally for one event
    #[instrument(skip(self))]
    pub async fn list_rsvps(&self, filter: RsvpFilter) -> EventResult<Vec<Rsvp>> {
        let query = match filter.event_id() {
            Some(event_id) => doc! { "event_id": event_id },
            None => doc! {},
        };

        let documents = self
            .store
            .get_documents(RSVP_COLLECTION, query, RSVP_LIST_LIMIT)
            .await?;

        Ok(decode_all::<RsvpRecord, Rsvp>(RSVP_COLLECTION, documents))
    }
}

/// Decode stored documents, skipping (and logging) the ones that don't fit the record shape.
fn decode_all<R, T>(collection: &str, documents: Vec<Document>) -> Vec<T>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = RecordError>,
{
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document
                .get_object_id("_id")
                .map(|oid| oid.to_hex())
                .unwrap_or_default();

            let decoded = bson::from_document::<R>(document)
                .map_err(|e| e.to_string())
                .and_then(|record| T::try_from(record).map_err(|e| e.to_string()));

            match decoded {
                Ok(entity) => Some(entity),
                Err(reason) => {
                    warn!(collection, document_id = %id, %reason, "Skipping malformed document");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use database::StoreResult;
    use mockall::mock;
    use mockall::predicate::*;

    mock! {
        pub Store {}

        #[async_trait]
        impl DocumentStore for Store {
            async fn create_document(&self, collection: &str, document: Document) -> StoreResult<String>;
            async fn get_documents(
                &self,
                collection: &str,
                filter: Document,
                limit: i64,
            ) -> StoreResult<Vec<Document>>;
            async fn find_document(
                &self,
                collection: &str,
                filter: Document,
            ) -> StoreResult<Option<Document>>;
        }
    }

    fn create_event_input(name: &str) -> CreateEvent {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "date": "2025-01-01T10:00:00",
            "location": "HQ"
        }))
        .unwrap()
    }

    fn create_rsvp_input(event_id: &str) -> CreateRsvp {
        CreateRsvp {
            event_id: event_id.to_string(),
            attendee: "Ada".to_string(),
            email: None,
            status: "attending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_event_stores_bson_datetime() {
        let mut store = MockStore::new();
        store
            .expect_create_document()
            .with(eq(EVENT_COLLECTION), always())
            .times(1)
            .returning(|_, document| {
                assert!(matches!(document.get("date"), Some(bson::Bson::DateTime(_))));
                assert_eq!(document.get_str("name").unwrap(), "Launch");
                Ok("65a1f0c2e4b0a1b2c3d4e5f6".to_string())
            });

        let service = EventService::new(store);
        let created = service.create_event(create_event_input("Launch")).await.unwrap();

        assert_eq!(created.id, "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[tokio::test]
    async fn test_create_event_stores_empty_name_as_given() {
        let mut store = MockStore::new();
        store
            .expect_create_document()
            .times(1)
            .returning(|_, document| {
                assert_eq!(document.get_str("name").unwrap(), "");
                Ok("65a1f0c2e4b0a1b2c3d4e5f6".to_string())
            });

        let service = EventService::new(store);
        let created = service.create_event(create_event_input("")).await.unwrap();

        assert_eq!(created.id, "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[tokio::test]
    async fn test_list_events_uses_cap_and_skips_malformed_documents() {
        let good = ObjectId::new();
        let mut store = MockStore::new();
        store
            .expect_get_documents()
            .with(eq(EVENT_COLLECTION), eq(doc! {}), eq(EVENT_LIST_LIMIT))
            .times(1)
            .returning(move |_, _, _| {
                Ok(vec![
                    doc! {
                        "_id": good,
                        "name": "Launch",
                        "date": bson::DateTime::from_millis(1_735_725_600_000),
                        "location": "HQ",
                    },
                    doc! { "_id": ObjectId::new(), "name": "No date or location" },
                ])
            });

        let service = EventService::new(store);
        let events = service.list_events().await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, good.to_hex());
    }

    #[tokio::test]
    async fn test_create_rsvp_rejects_malformed_event_id() {
        let mut store = MockStore::new();
        store.expect_find_document().never();
        store.expect_create_document().never();

        let service = EventService::new(store);
        let result = service.create_rsvp(create_rsvp_input("not-an-id")).await;

        assert!(matches!(result, Err(EventError::InvalidEventId(id)) if id == "not-an-id"));
    }

    #[tokio::test]
    async fn test_create_rsvp_for_missing_event() {
        let event_id = ObjectId::new();
        let mut store = MockStore::new();
        store
            .expect_find_document()
            .with(eq(EVENT_COLLECTION), eq(doc! { "_id": event_id }))
            .times(1)
            .returning(|_, _| Ok(None));
        store.expect_create_document().never();

        let service = EventService::new(store);
        let result = service.create_rsvp(create_rsvp_input(&event_id.to_hex())).await;

        assert!(matches!(result, Err(EventError::EventNotFound(_))));
    }

    #[tokio::test]
    async fn test_create_rsvp_lookup_failure_is_a_store_error() {
        let mut store = MockStore::new();
        store
            .expect_find_document()
            .returning(|_, _| Err(StoreError::Unavailable("connection refused".into())));
        store.expect_create_document().never();

        let service = EventService::new(store);
        let result = service
            .create_rsvp(create_rsvp_input(&ObjectId::new().to_hex()))
            .await;

        assert!(matches!(result, Err(EventError::Store(StoreError::Unavailable(_)))));
    }

    #[tokio::test]
    async fn test_create_rsvp_stores_event_id_as_string() {
        let event_id = ObjectId::new();
        let mut store = MockStore::new();
        store
            .expect_find_document()
            .returning(move |_, _| Ok(Some(doc! { "_id": event_id })));
        store
            .expect_create_document()
            .with(eq(RSVP_COLLECTION), always())
            .times(1)
            .returning(move |_, document| {
                assert_eq!(document.get_str("event_id").unwrap(), event_id.to_hex());
                assert_eq!(document.get_str("status").unwrap(), "attending");
                Ok("65a1f0c2e4b0a1b2c3d4e5f7".to_string())
            });

        let service = EventService::new(store);
        let created = service
            .create_rsvp(create_rsvp_input(&event_id.to_hex()))
            .await
            .unwrap();

        assert_eq!(created.id, "65a1f0c2e4b0a1b2c3d4e5f7");
    }

    #[tokio::test]
    async fn test_list_rsvps_filters_by_event_id() {
        let mut store = MockStore::new();
        store
            .expect_get_documents()
            .with(
                eq(RSVP_COLLECTION),
                eq(doc! { "event_id": "65a1f0c2e4b0a1b2c3d4e5f6" }),
                eq(RSVP_LIST_LIMIT),
            )
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let service = EventService::new(store);
        let rsvps = service
            .list_rsvps(RsvpFilter::for_event("65a1f0c2e4b0a1b2c3d4e5f6"))
            .await
            .unwrap();

        assert!(rsvps.is_empty());
    }

    #[tokio::test]
    async fn test_list_rsvps_empty_filter_matches_everything() {
        let mut store = MockStore::new();
        store
            .expect_get_documents()
            .with(eq(RSVP_COLLECTION), eq(doc! {}), eq(RSVP_LIST_LIMIT))
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let service = EventService::new(store);
        service.list_rsvps(RsvpFilter::for_event("")).await.unwrap();
    }
}
