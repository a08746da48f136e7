//! Events domain against a real MongoDB (testcontainers)
//!
//! Run with: cargo test -p domain_events --test mongo_test -- --ignored

use database::mongodb::MongoDocumentStore;
use domain_events::*;
use serde_json::json;
use test_utils::{TestDataBuilder, TestMongo};

fn create_event_input(name: &str) -> CreateEvent {
    serde_json::from_value(json!({
        "name": name,
        "date": "2025-01-01T10:00:00.250",
        "location": "Main hall",
    }))
    .unwrap()
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_events_and_rsvps_round_trip_through_mongodb() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("events_round_trip");
    let handle = mongo.handle(&builder.database()).await;
    let service = EventService::new(MongoDocumentStore::new(handle));

    let name = builder.name("event", "launch");
    let created = service.create_event(create_event_input(&name)).await.unwrap();

    let events = service.list_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, created.id);
    assert_eq!(events[0].name, name);
    assert_eq!(
        serde_json::to_value(&events[0]).unwrap()["date"],
        "2025-01-01T10:00:00.250"
    );

    let rsvp = service
        .create_rsvp(CreateRsvp {
            event_id: created.id.clone(),
            attendee: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            status: "attending".to_string(),
        })
        .await
        .unwrap();

    let rsvps = service
        .list_rsvps(RsvpFilter::for_event(created.id.clone()))
        .await
        .unwrap();
    assert_eq!(rsvps.len(), 1);
    assert_eq!(rsvps[0].id, rsvp.id);
    assert_eq!(rsvps[0].status, "attending");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_rsvp_for_missing_event_in_mongodb() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("events_missing_event");
    let handle = mongo.handle(&builder.database()).await;
    let service = EventService::new(MongoDocumentStore::new(handle));

    let result = service
        .create_rsvp(CreateRsvp {
            event_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            attendee: "Ada".to_string(),
            email: None,
            status: "maybe".to_string(),
        })
        .await;

    assert!(matches!(result, Err(EventError::EventNotFound(_))));
}
