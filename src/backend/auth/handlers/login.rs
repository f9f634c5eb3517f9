/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Looks up the user by email and verifies the password against the stored
 * bcrypt hash (constant-time compare inside bcrypt). On success a session
 * token is issued and set as the cookie.
 *
 * Internally "no such user" and "wrong password" are different errors, but
 * both reach the caller as 401 with one generic message so the endpoint
 * cannot be used to enumerate registered emails.
 */

use axum::extract::State;
use axum::Json;
use tower_cookies::Cookies;

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserView};
use crate::backend::auth::users::find_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!(email = %request.email, "login request");

    let user = find_by_email(&state.db, &request.email)
        .await?
        .ok_or(ApiError::UnknownUser)?;

    let valid = bcrypt::verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification failed: {e}");
        ApiError::internal("password verification failed")
    })?;
    if !valid {
        return Err(ApiError::BadCredentials);
    }

    let token = state
        .session_keys
        .issue(user.id, user.email.clone(), user.role)
        .map_err(|e| {
            tracing::error!("token issuance failed: {e}");
            ApiError::internal("token issuance failed")
        })?;
    cookies.add(session_cookie(token, state.config.cookie_secure));

    tracing::info!(user = %user.id, role = %user.role, "user logged in");

    Ok(Json(AuthResponse {
        success: true,
        message: "User logged in successfully".to_string(),
        user: UserView::from(&user),
    }))
}
