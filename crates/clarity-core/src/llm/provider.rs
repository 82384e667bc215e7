//! InferenceProvider trait definition.
//!
//! This is the abstraction the conversation actor calls through for every
//! chat turn. Uses native async fn in traits (RPITIT, Rust 2024 edition).

use clarity_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for hosted inference backends.
///
/// The upstream is treated as an opaque capability: one non-streamed
/// completion per call, no retry or backoff around it. Implementations
/// live in clarity-infra (e.g., `WorkersAiProvider`).
pub trait InferenceProvider: Send + Sync {
    /// Human-readable provider name (e.g., "workers-ai").
    fn name(&self) -> &str;

    /// Send a completion request and await the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
