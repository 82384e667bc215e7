//! Conversation HTTP handlers.
//!
//! Endpoints:
//! - POST /api/chat    - Run one chat turn against the session's actor
//! - GET  /api/history - Return the session's stored message log
//! - POST /api/reset   - Delete the session's conversation
//!
//! The session id is resolved by the cookie middleware and read from
//! request extensions. Each handler checks out the session's actor from
//! the registry, which serializes same-session requests.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use clarity_types::chat::{ChatTurn, StoredMessage};
use clarity_types::error::ChatError;
use clarity_types::session::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for the history endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<StoredMessage>,
}

/// Response body for the reset endpoint.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
}

/// POST /api/chat - Append a user message, call the model, return the reply.
///
/// The body is inspected as loose JSON so a missing or non-string
/// `message` surfaces as the same invalid-input error the actor raises
/// for an empty one.
pub async fn chat(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ChatTurn>, AppError> {
    let message = body
        .get("message")
        .and_then(|v| v.as_str())
        .ok_or(AppError::Chat(ChatError::InvalidMessage))?;

    let actor = state.registry.checkout(session).await;
    let turn = actor.chat(message).await?;

    Ok(Json(turn))
}

/// GET /api/history - The full stored log, or empty if none exists.
pub async fn history(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<HistoryResponse>, AppError> {
    let actor = state.registry.checkout(session).await;
    let conversation = actor.history().await?;

    Ok(Json(HistoryResponse {
        messages: conversation.messages,
    }))
}

/// POST /api/reset - Delete the stored conversation. Idempotent.
pub async fn reset(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<ResetResponse>, AppError> {
    let actor = state.registry.checkout(session).await;
    actor.reset().await?;

    Ok(Json(ResetResponse { success: true }))
}
