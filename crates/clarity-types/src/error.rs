use thiserror::Error;

use crate::llm::LlmError;

/// Errors from storage operations (used by trait definitions in clarity-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from conversation actor operations.
///
/// Client input errors map to 4xx at the edge; collaborator failures
/// propagate unchanged as server errors -- no retry, no fallback reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid message")]
    InvalidMessage,

    #[error(transparent)]
    Inference(#[from] LlmError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
