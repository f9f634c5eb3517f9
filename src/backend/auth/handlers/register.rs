/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * 1. Validate name, email shape, password length, and role
 * 2. Fast-path duplicate check by email
 * 3. Hash the password with bcrypt (cost 12)
 * 4. Insert the user; a unique violation on the email index is the
 *    authoritative duplicate signal (the pre-check only narrows the race)
 * 5. Issue a session token and set the cookie; registration logs the user
 *    in immediately
 *
 * # Errors
 *
 * * `400` - missing/malformed field, unknown role, or duplicate email
 * * `500` - hashing, store, or token issuance failure
 */

use axum::extract::State;
use axum::Json;
use bcrypt::DEFAULT_COST;
use tower_cookies::Cookies;

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest, UserView};
use crate::backend::auth::users::{create_user, find_by_email, is_unique_violation};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::roles::Role;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

pub async fn register(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("Invalid email format"));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }
    let role: Role = request
        .role
        .parse()
        .map_err(|_| ApiError::validation("Role must be one of patient, doctor, admin"))?;

    tracing::info!(email = %request.email, %role, "registration request");

    // Fast path; the unique index below is the authority.
    if find_by_email(&state.db, &request.email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = bcrypt::hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        ApiError::internal("password hashing failed")
    })?;

    let user = match create_user(&state.db, name, &request.email, &password_hash, role).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => return Err(ApiError::DuplicateEmail),
        Err(e) => return Err(e.into()),
    };

    let token = state
        .session_keys
        .issue(user.id, user.email.clone(), user.role)
        .map_err(|e| {
            tracing::error!("token issuance failed: {e}");
            ApiError::internal("token issuance failed")
        })?;
    cookies.add(session_cookie(token, state.config.cookie_secure));

    tracing::info!(user = %user.id, "user registered and logged in");

    Ok(Json(AuthResponse {
        success: true,
        message: "User registered and logged in successfully".to_string(),
        user: UserView::from(&user),
    }))
}
