use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{MongoHandle, check_health_detailed};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Starting Event Planning API"
    );

    if let Some(mongodb) = &config.database {
        info!("Using MongoDB at {}", mongodb.redacted_url());
    }

    // The client connects lazily; a missing or malformed DATABASE_URL leaves the
    // handle unavailable and the API keeps serving.
    let handle = MongoHandle::establish(config.database.as_ref()).await;

    if let Some(client) = handle.client().cloned() {
        tokio::spawn(async move {
            let status = check_health_detailed(&client).await;
            if status.healthy {
                info!(
                    response_time_ms = status.response_time_ms,
                    "MongoDB reachable"
                );
            } else {
                warn!(
                    error = status.message.as_deref().unwrap_or("unknown"),
                    "MongoDB not reachable yet, requests will fail until it is"
                );
            }
        });
    }

    // Initialize the application state
    let state = AppState { config, handle };

    let root_routes = api::root_routes(&state);
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs and middleware
    let router = axum_helpers::create_router::<openapi::ApiDoc>(root_routes, api_routes);

    info!("Starting Event Planning API with graceful shutdown (30s timeout)");

    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            if let Some(client) = state.handle.client().cloned() {
                client.shutdown().await;
            }
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Event Planning API shutdown complete");
    Ok(())
}
