//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Environment-driven configuration
//! - **`init`** - Pool setup, migrations, router assembly
//!
//! # Initialization Flow
//!
//! 1. Load `Config` from the environment
//! 2. Connect PostgreSQL and run migrations
//! 3. Build `AppState` (pool, session keys, places client)
//! 4. Assemble the router with cookie, CORS, and trace layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
