/**
 * Recommendations Module
 *
 * Nearby healthcare facilities: haversine helper, third-party places
 * client, and the query handler.
 */

pub mod geo;
pub mod handlers;
pub mod places;

pub use handlers::get_recommendations;
