//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Planning API",
        version = "0.1.0",
        description = "Create events, RSVP to them and list both (MongoDB)",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(health::root, health::test_database),
    components(schemas(health::RootResponse, health::Diagnostics)),
    nest(
        (path = "/api", api = domain_events::ApiDoc)
    ),
    tags(
        (name = "Health", description = "Liveness and database diagnostics")
    )
)]
pub struct ApiDoc;
