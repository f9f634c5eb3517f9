/**
 * Authentication Handlers
 *
 * HTTP handlers for the auth endpoints:
 *
 * - `register`   - POST /api/auth/register
 * - `login`      - POST /api/auth/login
 * - `logout`     - POST /api/auth/logout
 * - `check_auth` - GET  /api/auth/check-auth (behind session middleware)
 */

pub mod check_auth;
pub mod login;
pub mod logout;
pub mod register;
pub mod types;

pub use check_auth::check_auth;
pub use login::login;
pub use logout::logout;
pub use register::register;
