//! ConversationStore trait definition.
//!
//! A durable per-key storage capability: one JSON-serializable
//! `Conversation` per session id, with whole-value replacement on write.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use clarity_types::chat::Conversation;
use clarity_types::error::RepositoryError;
use clarity_types::session::SessionId;

/// Storage trait for conversation persistence.
///
/// Implementations live in clarity-infra (e.g., `SqliteConversationStore`).
/// Writes replace the stored value atomically as a single unit; there is
/// no partial or incremental persistence.
pub trait ConversationStore: Send + Sync {
    /// Load the stored conversation for a session, if any.
    fn get(
        &self,
        session: &SessionId,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// Persist a conversation, replacing any prior stored value entirely.
    fn put(
        &self,
        session: &SessionId,
        conversation: &Conversation,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete the stored conversation. Deleting a missing key is a no-op.
    fn delete(
        &self,
        session: &SessionId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
