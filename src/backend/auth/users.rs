/**
 * User Model and Credential Store Operations
 *
 * The credential store holds one row per user: display name, unique email,
 * bcrypt password hash, and role. Users are created by registration and read
 * by login; no exposed operation updates or deletes them.
 *
 * Email uniqueness is enforced by the store's unique index. The handlers
 * keep a find-by-email pre-check as a fast path, but the index is the
 * authority: a concurrent registration race resolves to a unique violation
 * on insert, which `is_unique_violation` detects.
 */

use crate::shared::roles::Role;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A user row. Never serialized to clients directly; handlers build a
/// public view without the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Insert a new user and return the stored row.
///
/// Fails with a unique violation if the email is already taken; callers map
/// that to `DuplicateEmail`.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, password_hash, role, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
}

/// Look up a user by email (case-sensitive, as the index is).
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Whether a store error is a unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}
