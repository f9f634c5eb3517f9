/**
 * API Route Configuration
 *
 * Declares every `/api` endpoint and splits them into a public group
 * (registration, login, logout) and a protected group wrapped by the
 * session middleware. Logout stays public on purpose: clearing a cookie
 * must work even when the token it carries has already expired.
 */

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::backend::auth;
use crate::backend::chatbot;
use crate::backend::family;
use crate::backend::middleware::require_session;
use crate::backend::patient;
use crate::backend::recommendations;
use crate::backend::reports;
use crate::backend::server::state::AppState;

/// Routes reachable without a session.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
}

/// Routes that require a valid session cookie.
///
/// The multipart upload route carries its own body limit; every other
/// route keeps the axum default.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/check-auth", get(auth::check_auth))
        .route("/api/patient/dashboard", get(patient::get_dashboard))
        .route(
            "/api/family",
            get(family::get_family).post(family::add_member),
        )
        .route("/api/family/{id}", delete(family::delete_member))
        .route(
            "/api/chatbot/message",
            post(chatbot::post_message),
        )
        .route(
            "/api/chatbot/history",
            get(chatbot::get_history).delete(chatbot::clear_history),
        )
        .route(
            "/api/reports/upload",
            post(reports::upload_report)
                .layer(DefaultBodyLimit::max(reports::MAX_UPLOAD_BYTES)),
        )
        .route("/api/reports/my", get(reports::my_reports))
        .route(
            "/api/recommendations",
            get(recommendations::get_recommendations),
        )
        .route_layer(middleware::from_fn_with_state(state, require_session))
}
