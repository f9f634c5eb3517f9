/**
 * Backend Error Module
 *
 * Error taxonomy and HTTP conversion for the whole API surface.
 */

pub mod types;

pub use types::ApiError;
