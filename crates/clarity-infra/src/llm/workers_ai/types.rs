//! Workers AI REST API types.
//!
//! These are Workers-AI-specific request/response structures used for HTTP
//! communication with `POST /accounts/{account}/ai/run/{model}`. They are
//! NOT the generic inference types from clarity-types -- those are
//! provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for a Workers AI text-generation run.
#[derive(Debug, Clone, Serialize)]
pub struct WorkersAiRequest {
    pub messages: Vec<WorkersAiMessage>,
    pub max_tokens: u32,
}

/// A single role/content pair in a Workers AI payload.
#[derive(Debug, Clone, Serialize)]
pub struct WorkersAiMessage {
    pub role: String,
    pub content: String,
}

/// Top-level response envelope from the Workers AI REST API.
///
/// Successful runs carry the model output under `result`; API-level
/// failures set `success: false` with entries in `errors`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiEnvelope {
    #[serde(default)]
    pub result: Option<WorkersAiResult>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<WorkersAiError>,
}

/// The model output inside a successful envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiResult {
    #[serde(default)]
    pub response: Option<String>,
}

/// An API-level error entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
