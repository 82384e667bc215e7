//! Application error type mapping to HTTP status codes.
//!
//! Error bodies are plain text, not a JSON envelope: client input errors
//! surface as 4xx, collaborator failures pass through unchanged as 500s.
//! The presentation layer shows its own apology; nothing is retried here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clarity_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Conversation actor errors (input validation, collaborator failures).
    Chat(ChatError),
    /// Generic internal error.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Chat(ChatError::InvalidMessage) => {
                (StatusCode::BAD_REQUEST, "Invalid message".to_string())
            }
            AppError::Chat(e) => {
                tracing::error!(error = %e, "chat turn failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, message).into_response()
    }
}
