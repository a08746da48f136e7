use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Invalid event_id: {0}")]
    InvalidEventId(String),

    #[error("Event {0} not found")]
    EventNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type EventResult<T> = Result<T, EventError>;

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            err @ EventError::InvalidEventId(_) => AppError::BadRequest(err.to_string()),
            err @ EventError::EventNotFound(_) => AppError::NotFound(err.to_string()),
            EventError::Store(StoreError::Unavailable(reason)) => {
                AppError::DatabaseUnavailable(reason)
            }
            EventError::Store(err) => AppError::Database(err.to_string()),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
