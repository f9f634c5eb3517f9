/**
 * Router Configuration
 *
 * Assembles the public and protected route groups into the final Axum
 * router and stacks the shared layers:
 *
 * 1. Cookie manager - parses the session cookie before anything else reads it
 * 2. CORS - single configured origin, credentials allowed so the browser
 *    sends the session cookie cross-origin
 * 3. Trace - one span per request with method and path
 *
 * Unknown paths fall through to a JSON 404 in the same envelope the API
 * errors use.
 */

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::{Json, Router};
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;

/// Build the full application router.
///
/// # Arguments
///
/// * `state` - Shared application state (pool, session keys, places client)
pub fn create_router(state: AppState) -> Router<()> {
    let cors = cors_layer(&state.config.cors_origin);

    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let origin = origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "success": false, "message": "Not Found" })),
    )
}
