//! Client-side authentication state.
//!
//! The client keeps a single in-memory `AuthState` that is re-derived from
//! the server on every application load via the check-session call. Nothing
//! about identity is cached across reloads other than the session cookie
//! itself, which the browser holds.
//!
//! State transitions mirror the request lifecycle: a check or sign-in starts
//! (`begin_check`), then either succeeds with a user or fails. Failure of the
//! bootstrap check is the normal signed-out case, not an error.

use crate::shared::roles::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity the server reported for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    /// Display name; the check-session endpoint omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// In-memory auth state, `{is_authenticated, user, is_loading, error}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    /// Initial state: unauthenticated and loading until the bootstrap
    /// check-session call resolves.
    pub fn new() -> Self {
        AuthState {
            is_authenticated: false,
            user: None,
            is_loading: true,
            error: None,
        }
    }

    /// A session check or sign-in request has been sent.
    pub fn begin_check(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// The server confirmed a valid session (or a sign-in/registration
    /// succeeded, which sets the cookie and reports the user in one step).
    pub fn signed_in(&mut self, user: SessionUser) {
        self.is_authenticated = true;
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
    }

    /// The bootstrap check found no valid session. This is the ordinary
    /// signed-out case, so no error is recorded.
    pub fn session_rejected(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        self.is_loading = false;
    }

    /// A sign-in or registration attempt failed with a server message.
    pub fn sign_in_failed(&mut self, message: impl Into<String>) {
        self.is_authenticated = false;
        self.user = None;
        self.is_loading = false;
        self.error = Some(message.into());
    }

    /// The user logged out (the server cleared the cookie).
    pub fn signed_out(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        self.is_loading = false;
        self.error = None;
    }

    /// Role of the authenticated user, if any. Feed for the route guard.
    pub fn current_role(&self) -> Option<Role> {
        if self.is_authenticated {
            self.user.as_ref().map(|u| u.role)
        } else {
            None
        }
    }
}
