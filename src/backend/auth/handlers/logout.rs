/**
 * Logout Handler
 *
 * POST /api/auth/logout
 *
 * Clears the session cookie unconditionally: no prior session is required
 * and the handler always succeeds. Tokens are stateless, so a copy captured
 * before logout stays cryptographically valid until its natural expiry;
 * there is no server-side revocation list.
 */

use axum::Json;
use tower_cookies::Cookies;

use crate::backend::auth::cookie::removal_cookie;
use crate::backend::auth::handlers::types::MessageResponse;

pub async fn logout(cookies: Cookies) -> Json<MessageResponse> {
    cookies.add(removal_cookie());
    Json(MessageResponse {
        success: true,
        message: "User logged out successfully".to_string(),
    })
}
