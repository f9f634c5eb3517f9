//! CareLink
//!
//! CareLink is a role-based healthcare service: patients, doctors, and
//! admins authenticate against an Axum REST backend and reach role-gated
//! dashboards. The backend covers stateless cookie sessions (JWT), family
//! member records, a keyword chatbot with a persisted message log, a
//! report scanner (file upload + mock parser), and nearby-facility
//! recommendations proxied to Google Places or OSM Nominatim.
//!
//! # Module Structure
//!
//! - **`shared`** - Pure types and logic usable by any client
//!   - Roles, the route guard decision function, the auth-state machine
//! - **`backend`** - The Axum server
//!   - Auth (token codec, session middleware, register/login/logout),
//!     feature handlers, error taxonomy, configuration, router
//!
//! # Authentication Flow
//!
//! 1. **Register**: credentials hashed with bcrypt, user stored, session
//!    cookie issued (registration auto-logs-in)
//! 2. **Login**: bcrypt verification, session cookie issued
//! 3. **Check-auth**: cookie verified, claims returned
//! 4. **Logout**: cookie cleared (tokens are stateless; no server-side
//!    revocation)

/// Shared types and pure client-side logic
pub mod shared;

/// Backend server-side code
pub mod backend;
