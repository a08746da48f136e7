use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableValidationResponse,
    },
};
use database::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{
    CreateEvent, CreateRsvp, CreatedResponse, Event, Rsvp, RsvpFilter,
};
use crate::service::EventService;

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, list_rsvps, create_rsvp),
    components(
        schemas(Event, CreateEvent, Rsvp, CreateRsvp, CreatedResponse),
        responses(
            BadRequestIdResponse,
            NotFoundResponse,
            UnprocessableValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Events", description = "Event management"),
        (name = "RSVPs", description = "Attendance responses for events")
    )
)]
pub struct ApiDoc;

/// Create the events router: `/events` and `/rsvps`
pub fn router<S: DocumentStore + 'static>(service: EventService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/events", get(list_events::<S>).post(create_event::<S>))
        .route("/rsvps", get(list_rsvps::<S>).post(create_rsvp::<S>))
        .with_state(shared_service)
}

/// List events (at most 100)
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "List of events", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.list_events().await?;
    Ok(Json(events))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    request_body = CreateEvent,
    responses(
        (status = 200, description = "Event created", body = CreatedResponse),
        (status = 422, response = UnprocessableValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateEvent>,
) -> EventResult<Json<CreatedResponse>> {
    let created = service.create_event(input).await?;
    Ok(Json(created))
}

/// List RSVPs (at most 200), optionally for one event
#[utoipa::path(
    get,
    path = "/rsvps",
    tag = "RSVPs",
    params(RsvpFilter),
    responses(
        (status = 200, description = "List of RSVPs", body = Vec<Rsvp>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_rsvps<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    Query(filter): Query<RsvpFilter>,
) -> EventResult<Json<Vec<Rsvp>>> {
    let rsvps = service.list_rsvps(filter).await?;
    Ok(Json(rsvps))
}

/// RSVP to an existing event
#[utoipa::path(
    post,
    path = "/rsvps",
    tag = "RSVPs",
    request_body = CreateRsvp,
    responses(
        (status = 200, description = "RSVP created", body = CreatedResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_rsvp<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateRsvp>,
) -> EventResult<Json<CreatedResponse>> {
    let created = service.create_rsvp(input).await?;
    Ok(Json(created))
}
