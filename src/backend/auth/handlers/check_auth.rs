/**
 * Check-Auth Handler
 *
 * GET /api/auth/check-auth
 *
 * Runs behind the session middleware; by the time this handler executes the
 * cookie has been verified and the claims attached. Returns the claims view
 * exactly as encoded at issuance, with no store lookup: a role changed after
 * issuance (no such operation exists today) would not show until re-login.
 */

use axum::Json;

use crate::backend::auth::handlers::types::{SessionResponse, SessionView};
use crate::backend::middleware::CurrentUser;

pub async fn check_auth(user: CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        success: true,
        message: "User is authenticated".to_string(),
        user: SessionView {
            id: user.id,
            email: user.email,
            role: user.role,
        },
    })
}
