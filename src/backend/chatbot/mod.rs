/**
 * Chatbot Module
 *
 * Keyword-matched replies over a persisted per-user message log.
 */

pub mod db;
pub mod handlers;
pub mod reply;

pub use handlers::{clear_history, get_history, post_message};
