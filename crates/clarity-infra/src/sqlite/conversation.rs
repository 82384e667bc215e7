//! SQLite conversation store implementation.
//!
//! Implements `ConversationStore` from `clarity-core` using sqlx with
//! split read/write pools. The whole conversation is stored as one JSON
//! text value per session id and replaced atomically on every write.

use chrono::Utc;
use sqlx::Row;

use clarity_core::conversation::store::ConversationStore;
use clarity_types::chat::Conversation;
use clarity_types::error::RepositoryError;
use clarity_types::session::SessionId;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationStore`.
pub struct SqliteConversationStore {
    pool: DatabasePool,
}

impl SqliteConversationStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl ConversationStore for SqliteConversationStore {
    async fn get(&self, session: &SessionId) -> Result<Option<Conversation>, RepositoryError> {
        let row = sqlx::query("SELECT state FROM conversations WHERE session_id = ?")
            .bind(session.as_str())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let state: String = row
                    .try_get("state")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                let conversation: Conversation = serde_json::from_str(&state)
                    .map_err(|e| RepositoryError::Serialization(format!("invalid state: {e}")))?;
                Ok(Some(conversation))
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        session: &SessionId,
        conversation: &Conversation,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let state = serde_json::to_string(conversation)
            .map_err(|e| RepositoryError::Serialization(format!("failed to serialize: {e}")))?;

        sqlx::query(
            r#"INSERT INTO conversations (session_id, state, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (session_id) DO UPDATE SET state = excluded.state, updated_at = excluded.updated_at"#,
        )
        .bind(session.as_str())
        .bind(&state)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, session: &SessionId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM conversations WHERE session_id = ?")
            .bind(session.as_str())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
