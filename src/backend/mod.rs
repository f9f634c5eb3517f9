//! Backend Module
//!
//! All server-side code: an Axum HTTP server with cookie-based JWT
//! sessions backed by PostgreSQL.
//!
//! # Architecture
//!
//! - **`server`** - Initialization, application state, configuration
//! - **`routes`** - HTTP route declarations and router assembly
//! - **`auth`** - Registration, login, sessions, user store
//! - **`middleware`** - Session-checking middleware and `CurrentUser`
//! - **`family`** - Family member records
//! - **`chatbot`** - Keyword health assistant with persisted history
//! - **`reports`** - Medical report upload, parsing, listing
//! - **`recommendations`** - Nearby facility lookups (Google / OSM)
//! - **`patient`** - Patient dashboard endpoint
//! - **`error`** - `ApiError` and its HTTP mapping
//!
//! # State Management
//!
//! `AppState` holds only cheap-to-clone handles (pool, HTTP client,
//! key material). Sessions live in the client-held token, so handlers
//! share no mutable in-process state and the store is the single source
//! of truth.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Family member records
pub mod family;

/// Keyword health assistant
pub mod chatbot;

/// Medical report uploads
pub mod reports;

/// Nearby facility recommendations
pub mod recommendations;

/// Patient dashboard
pub mod patient;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::create_app;
