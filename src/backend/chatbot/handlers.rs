/**
 * Chatbot Handlers
 *
 * - `POST   /api/chatbot/message` - persist the user message, compute a
 *   reply, persist the bot message, return both
 * - `GET    /api/chatbot/history` - the caller's conversation, oldest first
 * - `DELETE /api/chatbot/history` - wipe the caller's conversation
 *
 * The exchange is synchronous within the request: there is no background
 * work and no retry; a store failure surfaces directly.
 */

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::chatbot::db::{self, ChatMessage, Sender};
use crate::backend::chatbot::reply::reply_for;
use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PostMessageResponse {
    pub success: bool,
    pub reply: String,
    pub user_message: ChatMessage,
    pub bot_message: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub success: bool,
    pub message: String,
}

pub async fn post_message(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::validation("Message is required"));
    }

    let user_message = db::insert_message(&pool, user.id, Sender::User, &request.message).await?;

    let reply = reply_for(&request.message);
    let bot_message = db::insert_message(&pool, user.id, Sender::Bot, reply).await?;

    Ok(Json(PostMessageResponse {
        success: true,
        reply: reply.to_string(),
        user_message,
        bot_message,
    }))
}

pub async fn get_history(
    State(pool): State<PgPool>,
    user: CurrentUser,
) -> Result<Json<HistoryResponse>, ApiError> {
    let messages = db::history_for_user(&pool, user.id).await?;
    Ok(Json(HistoryResponse {
        success: true,
        messages,
    }))
}

pub async fn clear_history(
    State(pool): State<PgPool>,
    user: CurrentUser,
) -> Result<Json<ClearedResponse>, ApiError> {
    let removed = db::clear_for_user(&pool, user.id).await?;
    tracing::info!(user = %user.id, removed, "chat history cleared");
    Ok(Json(ClearedResponse {
        success: true,
        message: "History cleared".to_string(),
    }))
}
