/**
 * Family Monitoring Handlers
 *
 * Owner-scoped CRUD over family member records:
 *
 * - `GET    /api/family`      - list the caller's members, newest first
 * - `POST   /api/family`      - add a member (name and relation required)
 * - `DELETE /api/family/{id}` - remove one of the caller's members
 *
 * All routes sit behind the session middleware; identity comes from the
 * `CurrentUser` extractor, never from the request body.
 */

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::family::db::{self, FamilyMember, NewFamilyMember};
use crate::backend::middleware::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub name: String,
    pub relation: String,
    pub age: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub success: bool,
    pub members: Vec<FamilyMember>,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub success: bool,
    pub member: FamilyMember,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

pub async fn get_family(
    State(pool): State<PgPool>,
    user: CurrentUser,
) -> Result<Json<MembersResponse>, ApiError> {
    let members = db::list_for_user(&pool, user.id).await?;
    Ok(Json(MembersResponse {
        success: true,
        members,
    }))
}

pub async fn add_member(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let name = request.name.trim();
    let relation = request.relation.trim();
    if name.is_empty() || relation.is_empty() {
        return Err(ApiError::validation("Name and relation are required"));
    }

    let member = db::insert(
        &pool,
        user.id,
        NewFamilyMember {
            name,
            relation,
            age: request.age,
            notes: request.notes.as_deref(),
        },
    )
    .await?;

    tracing::info!(user = %user.id, member = %member.id, "family member added");

    Ok(Json(MemberResponse {
        success: true,
        member,
    }))
}

pub async fn delete_member(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let removed = db::delete_for_user(&pool, user.id, id).await?;
    if !removed {
        return Err(ApiError::NotFound("Member"));
    }

    Ok(Json(DeletedResponse {
        success: true,
        message: "Member deleted".to_string(),
    }))
}
