/**
 * Middleware Module
 *
 * Request middleware: session validation for protected routes.
 */

pub mod auth;

pub use auth::{require_session, CurrentUser};
