use tower_http::cors::CorsLayer;

/// Creates a fully open CORS layer that still allows credentials.
///
/// Browsers reject `Access-Control-Allow-Origin: *` on credentialed requests, so the
/// request's `Origin`, method and headers are mirrored back instead of using
/// wildcards.
pub fn create_open_cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
