/**
 * Family Monitoring Module
 *
 * Per-patient family member records: model, store operations, handlers.
 */

pub mod db;
pub mod handlers;

pub use handlers::{add_member, delete_member, get_family};
