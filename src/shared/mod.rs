//! Shared Module
//!
//! Types and logic shared between the backend and any client of the API.
//! Everything here is pure: no I/O, no server framework types, so the route
//! guard and auth-state machine can be exercised by a native or web client
//! exactly as the server's tests exercise them.

/// User roles (closed set).
pub mod roles;

/// Client-side route guard (navigation decision function).
pub mod guard;

/// Client-side authentication state machine.
pub mod auth_state;

pub use auth_state::{AuthState, SessionUser};
pub use guard::{decide, RouteDecision};
pub use roles::{Role, UnknownRole};
