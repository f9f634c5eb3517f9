/**
 * Family Member Store Operations
 *
 * Every query is scoped by the owning user's id; a member id from another
 * account behaves exactly like a missing row.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A family member monitored by a patient.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FamilyMember {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub relation: String,
    pub age: Option<i32>,
    pub notes: Option<String>,
    /// Latest health note, e.g. "BP: 120/80".
    pub latest_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New member fields, already validated by the handler.
pub struct NewFamilyMember<'a> {
    pub name: &'a str,
    pub relation: &'a str,
    pub age: Option<i32>,
    pub notes: Option<&'a str>,
}

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<FamilyMember>, sqlx::Error> {
    sqlx::query_as::<_, FamilyMember>(
        r#"
        SELECT id, user_id, name, relation, age, notes, latest_status, created_at
        FROM family_members
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    member: NewFamilyMember<'_>,
) -> Result<FamilyMember, sqlx::Error> {
    sqlx::query_as::<_, FamilyMember>(
        r#"
        INSERT INTO family_members (id, user_id, name, relation, age, notes)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, name, relation, age, notes, latest_status, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(member.name)
    .bind(member.relation)
    .bind(member.age)
    .bind(member.notes)
    .fetch_one(pool)
    .await
}

/// Delete a member owned by `user_id`. Returns whether a row was removed.
pub async fn delete_for_user(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM family_members
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
