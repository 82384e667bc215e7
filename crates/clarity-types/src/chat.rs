//! Conversation and message types for Clarity Relay.
//!
//! A conversation is a strictly linear append log of user/assistant
//! messages, bounded to the most recent [`CONTEXT_WINDOW`] entries both in
//! storage and in the model input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole from the llm module (it's used in both stored
// messages and inference payloads).
pub use crate::llm::MessageRole;

/// Maximum number of messages retained in storage and sent to the model.
pub const CONTEXT_WINDOW: usize = 20;

/// A single message in a conversation log.
///
/// Immutable once created; never edited or reordered. Timestamps serialize
/// as epoch milliseconds because the wire contract is a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl StoredMessage {
    /// Create a user message stamped with the current instant.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an assistant message stamped with the current instant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The persisted unit of state, keyed by session id.
///
/// Messages are in insertion order, oldest first. The persisted sequence
/// never exceeds [`CONTEXT_WINDOW`] entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<StoredMessage>,
}

impl Conversation {
    /// The most recent [`CONTEXT_WINDOW`] messages, oldest first.
    ///
    /// Mid-turn the log can briefly hold one message over the window (the
    /// just-appended user message); this is the slice sent to the model.
    pub fn recent_window(&self) -> &[StoredMessage] {
        let start = self.messages.len().saturating_sub(CONTEXT_WINDOW);
        &self.messages[start..]
    }

    /// Drop everything but the most recent [`CONTEXT_WINDOW`] messages.
    ///
    /// Tail truncation: the oldest entries go first.
    pub fn truncate_to_window(&mut self) {
        let excess = self.messages.len().saturating_sub(CONTEXT_WINDOW);
        if excess > 0 {
            self.messages.drain(..excess);
        }
    }
}

/// The outcome of one chat turn: the assistant's reply and its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub response: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(n: usize) -> Conversation {
        let mut conversation = Conversation::default();
        for i in 0..n {
            conversation.messages.push(StoredMessage::user(format!("m{i}")));
        }
        conversation
    }

    #[test]
    fn test_stored_message_timestamp_serializes_as_millis() {
        let msg = StoredMessage::user("hello");
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert!(json["timestamp"].is_i64() || json["timestamp"].is_u64());
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_stored_message_roundtrip() {
        let msg = StoredMessage::assistant("sure, tell me more");
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: StoredMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, MessageRole::Assistant);
        assert_eq!(parsed.content, "sure, tell me more");
        // Millisecond precision survives the roundtrip.
        assert_eq!(
            parsed.timestamp.timestamp_millis(),
            msg.timestamp.timestamp_millis()
        );
    }

    #[test]
    fn test_recent_window_under_limit_returns_all() {
        let conversation = filler(5);
        assert_eq!(conversation.recent_window().len(), 5);
    }

    #[test]
    fn test_recent_window_over_limit_keeps_tail() {
        let conversation = filler(CONTEXT_WINDOW + 3);
        let window = conversation.recent_window();
        assert_eq!(window.len(), CONTEXT_WINDOW);
        assert_eq!(window[0].content, "m3");
        assert_eq!(window[CONTEXT_WINDOW - 1].content, "m22");
    }

    #[test]
    fn test_truncate_to_window_drops_oldest() {
        let mut conversation = filler(CONTEXT_WINDOW + 2);
        conversation.truncate_to_window();
        assert_eq!(conversation.messages.len(), CONTEXT_WINDOW);
        assert_eq!(conversation.messages[0].content, "m2");
    }

    #[test]
    fn test_truncate_to_window_noop_when_bounded() {
        let mut conversation = filler(4);
        conversation.truncate_to_window();
        assert_eq!(conversation.messages.len(), 4);
        assert_eq!(conversation.messages[0].content, "m0");
    }

    #[test]
    fn test_conversation_default_is_empty() {
        let conversation = Conversation::default();
        assert!(conversation.messages.is_empty());
        assert!(conversation.recent_window().is_empty());
    }

    #[test]
    fn test_chat_turn_serializes_numeric_timestamp() {
        let turn = ChatTurn {
            response: "consider the reversibility of each option".to_string(),
            timestamp: Utc::now(),
        };
        let json: serde_json::Value = serde_json::to_value(&turn).unwrap();
        assert!(json["timestamp"].is_i64() || json["timestamp"].is_u64());
        assert!(json["response"].is_string());
    }
}
