/**
 * Report Scanner Handlers
 *
 * - `POST /api/reports/upload` - multipart upload (field `file`), stored to
 *   disk, run through the mock parser, metadata persisted
 * - `GET  /api/reports/my`     - the caller's reports, newest first
 *
 * Only PDF and PNG/JPEG images are accepted, capped at 20 MB (the route
 * carries a matching body limit).
 */

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::backend::reports::db::{self, NewReport, Report};
use crate::backend::reports::parser::parse_report;
use crate::backend::reports::storage::{save_upload, stored_filename};
use crate::backend::server::state::AppState;

/// Upload cap, enforced both by the route body limit and per-file here.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

const ALLOWED_MIME_TYPES: &[&str] = &["application/pdf", "image/png", "image/jpeg", "image/jpg"];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub success: bool,
    pub reports: Vec<Report>,
}

pub async fn upload_report(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    // Locate the `file` field; other fields are ignored.
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("malformed multipart body: {e}");
        ApiError::validation("Malformed upload")
    })? {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| ApiError::validation("Uploaded file has no filename"))?;
            let mime_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let bytes = field.bytes().await.map_err(|e| {
                tracing::warn!("failed to read upload body: {e}");
                ApiError::validation("Malformed upload")
            })?;
            upload = Some((filename, mime_type, bytes));
            break;
        }
    }
    let Some((filename, mime_type, bytes)) = upload else {
        return Err(ApiError::validation("No file uploaded"));
    };

    if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
        return Err(ApiError::validation("Only PDF and image files are allowed"));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::validation("File exceeds the 20 MB limit"));
    }

    let stored_name = stored_filename(chrono::Utc::now().timestamp_millis(), &filename);
    let path = save_upload(&state.config.upload_dir, &stored_name, &bytes)
        .await
        .map_err(|e| {
            tracing::error!("failed to store upload: {e}");
            ApiError::internal("failed to store upload")
        })?;

    let (kind, parsed) = parse_report(&filename);

    let report = db::insert_report(
        &state.db,
        user.id,
        NewReport {
            filename: &filename,
            stored_filename: &stored_name,
            mime_type: &mime_type,
            size: bytes.len() as i64,
            storage_path: &path.to_string_lossy(),
            report_type: kind.as_str(),
            parsed_data: &parsed,
        },
    )
    .await?;

    tracing::info!(user = %user.id, report = %report.id, kind = report.report_type, "report uploaded");

    Ok(Json(UploadResponse {
        success: true,
        message: "Report uploaded and parsed successfully".to_string(),
        report,
    }))
}

pub async fn my_reports(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ReportsResponse>, ApiError> {
    let reports = db::list_for_user(&state.db, user.id).await?;
    Ok(Json(ReportsResponse {
        success: true,
        reports,
    }))
}
