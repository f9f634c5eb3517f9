//! Route Configuration Module
//!
//! Declares the HTTP surface of the server and assembles it into one
//! router.
//!
//! # Module Structure
//!
//! - **`router`** - Final router assembly and shared layers
//! - **`api_routes`** - `/api` endpoint declarations (public + protected)
//!
//! # Endpoints
//!
//! Public:
//! - `POST /api/auth/register` - Create account, auto-login
//! - `POST /api/auth/login` - Authenticate, set session cookie
//! - `POST /api/auth/logout` - Clear session cookie
//!
//! Protected (session cookie required):
//! - `GET    /api/auth/check-auth` - Validate session, return identity
//! - `GET    /api/patient/dashboard` - Patient dashboard data
//! - `GET    /api/family` - List family members
//! - `POST   /api/family` - Add family member
//! - `DELETE /api/family/{id}` - Remove family member
//! - `POST   /api/chatbot/message` - Send message, get bot reply
//! - `GET    /api/chatbot/history` - Conversation history
//! - `DELETE /api/chatbot/history` - Clear conversation
//! - `POST   /api/reports/upload` - Upload a medical report
//! - `GET    /api/reports/my` - List own reports
//! - `GET    /api/recommendations` - Nearby healthcare facilities

/// Main router creation
pub mod router;

/// API endpoint declarations
pub mod api_routes;

pub use router::create_router;
