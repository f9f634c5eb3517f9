/**
 * Authentication Handler Types
 *
 * Request and response bodies for the auth endpoints. The public user views
 * never carry the password hash.
 */

use crate::backend::auth::users::User;
use crate::shared::roles::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of POST /api/auth/register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// One of `patient`, `doctor`, `admin`; validated against the closed set.
    pub role: String,
}

/// Body of POST /api/auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user, returned by register and login.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Response of register and login: the cookie is set alongside this body.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserView,
}

/// The claims view returned by check-auth (no name: claims carry only what
/// was encoded at issuance).
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Response of check-auth.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub message: String,
    pub user: SessionView,
}

/// Response of logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
