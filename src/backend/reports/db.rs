/**
 * Report Metadata Store Operations
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Original filename as uploaded.
    pub filename: String,
    /// Sanitized, timestamp-prefixed name on disk.
    pub stored_filename: String,
    pub mime_type: String,
    pub size: i64,
    pub storage_path: String,
    pub report_type: String,
    pub parsed_data: Value,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert fields for a freshly stored upload.
pub struct NewReport<'a> {
    pub filename: &'a str,
    pub stored_filename: &'a str,
    pub mime_type: &'a str,
    pub size: i64,
    pub storage_path: &'a str,
    pub report_type: &'a str,
    pub parsed_data: &'a Value,
}

pub async fn insert_report(
    pool: &PgPool,
    user_id: Uuid,
    report: NewReport<'_>,
) -> Result<Report, sqlx::Error> {
    sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports
            (id, user_id, filename, stored_filename, mime_type, size, storage_path, report_type, parsed_data)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, filename, stored_filename, mime_type, size, storage_path,
                  report_type, parsed_data, notes, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(report.filename)
    .bind(report.stored_filename)
    .bind(report.mime_type)
    .bind(report.size)
    .bind(report.storage_path)
    .bind(report.report_type)
    .bind(report.parsed_data)
    .fetch_one(pool)
    .await
}

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Report>, sqlx::Error> {
    sqlx::query_as::<_, Report>(
        r#"
        SELECT id, user_id, filename, stored_filename, mime_type, size, storage_path,
               report_type, parsed_data, notes, created_at
        FROM reports
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
