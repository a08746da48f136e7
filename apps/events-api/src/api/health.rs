//! Liveness and database diagnostics endpoints
//!
//! Both always answer 200; database problems are reported inside the body.

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::truncate_message;
use database::mongodb::{MongoHandle, list_collections};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Number of collection names reported by `/test`
const MAX_COLLECTIONS: usize = 10;
/// Longest database error echoed in the diagnostics body
const MAX_DIAGNOSTIC_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Event Planning API is running")]
    pub message: String,
}

/// Connectivity report returned by `GET /test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnostics {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    /// Whether `DATABASE_URL` was set; null when no database handle exists
    #[schema(example = "✅ Set")]
    pub database_url: Option<String>,
    #[schema(example = "event_planner")]
    pub database_name: Option<String>,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// First collection names, in server order
    pub collections: Vec<String>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

/// Probe the database behind `handle`. Never fails.
pub async fn diagnose(handle: &MongoHandle, database_url_set: bool) -> Diagnostics {
    let mut report = Diagnostics::default();

    let MongoHandle::Connected { database, .. } = handle else {
        report.database = "⚠️  Available but not initialized".to_string();
        return report;
    };

    report.database = "✅ Available".to_string();
    report.database_url = Some(if database_url_set { "✅ Set" } else { "❌ Not Set" }.to_string());
    report.database_name = Some(database.name().to_string());
    report.connection_status = "Connected".to_string();

    match list_collections(database, MAX_COLLECTIONS).await {
        Ok(names) => {
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database diagnostics failed");
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_message(&e.to_string(), MAX_DIAGNOSTIC_ERROR_CHARS)
            );
        }
    }

    report
}

/// Create the root router (`/`, `/test`)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .with_state(state)
}

/// Liveness marker
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "API is running", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Event Planning API is running".to_string(),
    })
}

/// Database connectivity diagnostics
#[utoipa::path(
    get,
    path = "/test",
    tag = "Health",
    responses((status = 200, description = "Diagnostics report", body = Diagnostics))
)]
pub async fn test_database(State(state): State<AppState>) -> Json<Diagnostics> {
    Json(diagnose(&state.handle, state.config.database_url_set()).await)
}
