/**
 * Report Scanner Module
 *
 * File upload, disk storage, the filename-keyword mock parser, and report
 * metadata persistence.
 */

pub mod db;
pub mod handlers;
pub mod parser;
pub mod storage;

pub use handlers::{my_reports, upload_report, MAX_UPLOAD_BYTES};
