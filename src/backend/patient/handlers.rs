/**
 * Patient Dashboard Handler
 *
 * GET /api/patient/dashboard
 *
 * Role-gated to patients server-side (the client route guard makes the same
 * call for UX). The payload is static example data standing in for a real
 * aggregation over reports, family records, and recommendations.
 */

use axum::Json;
use serde_json::{json, Value};

use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::shared::roles::Role;

pub async fn get_dashboard(user: CurrentUser) -> Result<Json<Value>, ApiError> {
    user.require_role(Role::Patient)?;

    let now = chrono::Utc::now();
    let data = json!({
        "healthScore": 82,
        "recentReports": [
            { "id": "r1", "title": "Blood Test - CBC", "date": now.to_rfc3339() },
            { "id": "r2", "title": "Chest X-Ray", "date": (now - chrono::Duration::days(1)).to_rfc3339() }
        ],
        "family": [
            { "id": "f1", "name": "Mom", "relation": "mother", "latestStatus": "BP: 130/80" }
        ],
        "recommendations": [
            "Follow up on iron levels in 2 weeks",
            "Keep hydrated and rest"
        ],
        "quickSummary": "Basic summary (mock). Replace with real aggregation later."
    });

    Ok(Json(json!({ "success": true, "data": data })))
}
