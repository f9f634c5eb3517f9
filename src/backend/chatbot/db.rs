/**
 * Chat Message Store Operations
 *
 * One row per message, tagged with who wrote it (user or bot). History is
 * read back ascending by creation time, scoped to the owning user.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sender: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

pub async fn insert_message(
    pool: &PgPool,
    user_id: Uuid,
    sender: Sender,
    text: &str,
) -> Result<ChatMessage, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO messages (id, user_id, sender, text)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, sender, text, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(sender.as_str())
    .bind(text)
    .fetch_one(pool)
    .await
}

pub async fn history_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, user_id, sender, text, created_at
        FROM messages
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Delete the user's entire conversation log. Returns the number of rows
/// removed.
pub async fn clear_for_user(pool: &PgPool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM messages
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
