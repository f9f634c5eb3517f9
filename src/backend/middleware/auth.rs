/**
 * Session Middleware
 *
 * Protects routes that require an authenticated user. The middleware reads
 * the session cookie, verifies the token against the active keys, and
 * attaches the decoded identity to the request's extensions. It is pure:
 * no store access, no token mutation. Downstream handlers own any further
 * checks (ownership scoping, role gating).
 *
 * Failure modes:
 * - no cookie              → 401 `Unauthenticated`
 * - cookie fails `verify`  → 401 `InvalidSession`
 */

use crate::backend::auth::cookie::SESSION_COOKIE;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::roles::Role;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tower_cookies::Cookies;
use uuid::Uuid;

/// Identity decoded from a valid session token, attached to request
/// extensions by `require_session`.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    /// Server-side role gate for role-reserved routes. The client route
    /// guard makes the same decision for UX, but it is never the sole
    /// enforcement point.
    pub fn require_role(&self, role: Role) -> Result<(), ApiError> {
        if self.role == role {
            Ok(())
        } else {
            tracing::warn!(user = %self.id, have = %self.role, want = %role, "role mismatch");
            Err(ApiError::Forbidden)
        }
    }
}

/// Middleware: require a valid session cookie.
pub async fn require_session(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = cookies
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(ApiError::Unauthenticated)?;

    let claims = state.session_keys.verify(&token).map_err(|e| {
        tracing::warn!("session token rejected: {e}");
        ApiError::InvalidSession
    })?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by `require_session`. Using it on a
/// route outside the middleware yields 401, not a panic.
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_require_role_matches() {
        assert!(user(Role::Patient).require_role(Role::Patient).is_ok());
        assert!(user(Role::Admin).require_role(Role::Admin).is_ok());
    }

    #[test]
    fn test_require_role_mismatch_is_forbidden() {
        let err = user(Role::Doctor).require_role(Role::Admin).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_is_unauthenticated() {
        use axum::extract::FromRequestParts;

        let request = axum::http::Request::builder()
            .uri("http://example.com/api/family")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result.unwrap_err(), ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_identity() {
        use axum::extract::FromRequestParts;

        let expected = user(Role::Patient);
        let mut request = axum::http::Request::builder()
            .uri("http://example.com/api/family")
            .body(())
            .unwrap();
        request.extensions_mut().insert(expected.clone());
        let (mut parts, _) = request.into_parts();

        let got = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(got.id, expected.id);
        assert_eq!(got.role, Role::Patient);
    }
}
