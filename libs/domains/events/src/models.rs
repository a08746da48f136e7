use chrono::NaiveDateTime;
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::timestamp;

/// MongoDB collection holding events
pub const EVENT_COLLECTION: &str = "event";
/// MongoDB collection holding RSVPs
pub const RSVP_COLLECTION: &str = "rsvp";

/// Maximum number of events returned by a list call
pub const EVENT_LIST_LIMIT: i64 = 100;
/// Maximum number of RSVPs returned by a list call
pub const RSVP_LIST_LIMIT: i64 = 200;

/// A stored document could not be turned into an API entity.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("document has no ObjectId `_id`")]
    MissingId,

    #[error("stored date {0}ms is out of range")]
    DateOutOfRange(i64),
}

/// Event document as stored in the `event` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: bson::DateTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
}

/// RSVP document as stored in the `rsvp` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex string of the referenced event's `_id`
    pub event_id: String,
    pub attendee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: String,
}

/// Event entity returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// 24-character hex ObjectId
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(value_type = String, format = DateTime, example = "2025-01-01T10:00:00")]
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
}

/// RSVP entity returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rsvp {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub event_id: String,
    pub attendee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schema(example = "attending")]
    pub status: String,
}

/// Payload for creating an event
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[schema(example = "Team offsite")]
    pub name: String,
    pub description: Option<String>,
    /// ISO-8601 datetime. Offsets are normalized to UTC.
    #[serde(deserialize_with = "timestamp::deserialize")]
    #[schema(value_type = String, format = DateTime, example = "2025-01-01T10:00:00")]
    pub date: NaiveDateTime,
    #[schema(example = "Main hall")]
    pub location: String,
    pub organizer: Option<String>,
    pub organizer_email: Option<String>,
}

/// Payload for creating an RSVP
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRsvp {
    /// Must be the id of an existing event
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub event_id: String,
    pub attendee: String,
    pub email: Option<String>,
    /// Free-form answer, e.g. `attending` or `declined`
    #[schema(example = "attending")]
    pub status: String,
}

/// Query parameters for listing RSVPs
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RsvpFilter {
    /// Only return RSVPs for this event. Empty means no filter.
    pub event_id: Option<String>,
}

impl RsvpFilter {
    pub fn for_event(event_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
        }
    }

    /// The event id to filter on, ignoring an empty value.
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Body returned by create endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Hex id of the new document
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
}

impl From<CreateEvent> for EventRecord {
    fn from(input: CreateEvent) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            date: timestamp::to_bson(&input.date),
            location: input.location,
            organizer: input.organizer,
            organizer_email: input.organizer_email,
        }
    }
}

impl From<CreateRsvp> for RsvpRecord {
    fn from(input: CreateRsvp) -> Self {
        Self {
            id: None,
            event_id: input.event_id,
            attendee: input.attendee,
            email: input.email,
            status: input.status,
        }
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or(RecordError::MissingId)?;
        let date = timestamp::from_bson(record.date)
            .ok_or(RecordError::DateOutOfRange(record.date.timestamp_millis()))?;

        Ok(Self {
            id: id.to_hex(),
            name: record.name,
            description: record.description,
            date,
            location: record.location,
            organizer: record.organizer,
            organizer_email: record.organizer_email,
        })
    }
}

impl TryFrom<RsvpRecord> for Rsvp {
    type Error = RecordError;

    fn try_from(record: RsvpRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or(RecordError::MissingId)?;

        Ok(Self {
            id: id.to_hex(),
            event_id: record.event_id,
            attendee: record.attendee,
            email: record.email,
            status: record.status,
        })
    }
}
