/**
 * Patient Module
 *
 * Patient-facing dashboard endpoint.
 */

pub mod handlers;

pub use handlers::get_dashboard;
