/**
 * Backend Error Types
 *
 * The single error taxonomy for the HTTP surface. Every domain failure is
 * caught at the handler boundary and rendered as a uniform
 * `{"success": false, "message": ...}` body with an appropriate status:
 * 400 for client-caused input problems, 401 for authentication failures,
 * 403 for role mismatches, 404 for missing resources, 500 for store or
 * unexpected failures. There are no retries anywhere; failures are terminal
 * per request.
 *
 * # Credential failures
 *
 * `UnknownUser` and `BadCredentials` stay distinct in the taxonomy so logs
 * and tests can tell them apart, but both render the same public message.
 * Distinguishable messages would let a caller enumerate registered emails.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// All failures a request can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A user already exists with the requested email.
    #[error("User already exists with this email")]
    DuplicateEmail,

    /// Login attempted for an email with no user record.
    #[error("no user for the supplied email")]
    UnknownUser,

    /// Login attempted with a password that does not match the stored hash.
    #[error("password mismatch")]
    BadCredentials,

    /// No session cookie on a request that requires one.
    #[error("No session token provided, authorization denied")]
    Unauthenticated,

    /// A session cookie was present but its token failed verification
    /// (bad signature, malformed, or expired).
    #[error("Session token is not valid")]
    InvalidSession,

    /// The authenticated user's role does not grant access to the resource.
    #[error("You do not have access to this resource")]
    Forbidden,

    /// A required field was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The referenced resource does not exist (or is not the caller's).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The credential store or another persistence operation failed.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    /// An outbound call to a third-party service failed.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Anything else: hashing failures, token encoding failures, etc.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status class for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UnknownUser
            | Self::BadCredentials
            | Self::Unauthenticated
            | Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message sent to the caller. Credential failures collapse to one
    /// generic message; server-side failures never leak their details.
    pub fn public_message(&self) -> String {
        match self {
            Self::UnknownUser | Self::BadCredentials => "Invalid email or password".to_string(),
            Self::Store(_) | Self::Upstream(_) | Self::Internal(_) => "Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        } else {
            tracing::warn!("request rejected: {self}");
        }
        let body = Json(json!({
            "success": false,
            "message": self.public_message(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_caused_errors_are_400() {
        assert_eq!(ApiError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::validation("Name is required").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_auth_failures_are_401() {
        assert_eq!(ApiError::UnknownUser.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::BadCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidSession.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_credential_failures_share_a_public_message() {
        assert_eq!(ApiError::UnknownUser.public_message(), "Invalid email or password");
        assert_eq!(ApiError::BadCredentials.public_message(), "Invalid email or password");
    }

    #[test]
    fn test_server_failures_do_not_leak_details() {
        let err = ApiError::internal("bcrypt blew up");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server Error");

        let err = ApiError::Store(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "Server Error");
    }

    #[test]
    fn test_not_found_names_the_resource() {
        let err = ApiError::NotFound("Member");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Member not found");
    }
}
