//! Authentication Module
//!
//! Token issuance, session cookies, and the register/login/logout/check-auth
//! endpoints.
//!
//! # Module Structure
//!
//! - **`users`** - User model and credential store operations
//! - **`sessions`** - Token codec (issue/verify, key rotation)
//! - **`cookie`** - Session cookie construction and removal
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed (cost 12) before storage and never leave
//!   the server after registration
//! - Tokens are stateless JWTs with a 60-minute lifetime, carried in an
//!   HTTP-only, `SameSite=Strict` cookie
//! - Key material is injected at process start and supports rotation
//! - Login failures return one generic message (no email enumeration)

pub mod cookie;
pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{check_auth, login, logout, register};
pub use sessions::{Claims, SessionKeys};
