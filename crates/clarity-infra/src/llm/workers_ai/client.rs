//! WorkersAiProvider -- concrete [`InferenceProvider`] for Cloudflare
//! Workers AI.
//!
//! Sends requests to `POST /accounts/{account}/ai/run/{model}` with bearer
//! authentication and awaits a single non-streamed completion. No retry or
//! backoff is layered around the call.
//!
//! The API token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use clarity_core::llm::provider::InferenceProvider;
use clarity_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{WorkersAiEnvelope, WorkersAiMessage, WorkersAiRequest};

/// Default Cloudflare REST API base.
const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare Workers AI inference provider.
pub struct WorkersAiProvider {
    client: reqwest::Client,
    api_token: SecretString,
    account_id: String,
    model: String,
    base_url: String,
}

impl WorkersAiProvider {
    /// Create a new Workers AI provider.
    ///
    /// # Arguments
    ///
    /// * `api_token` - Cloudflare API token wrapped in SecretString
    /// * `account_id` - Account the AI endpoint is scoped to
    /// * `model` - Model identifier (e.g., "@cf/meta/llama-3.3-70b-instruct-fp8-fast")
    pub fn new(api_token: SecretString, account_id: String, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_token,
            account_id,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// The model this provider runs.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the run URL for this provider's account and model.
    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, self.model
        )
    }

    fn to_workers_ai_request(&self, request: &CompletionRequest) -> WorkersAiRequest {
        WorkersAiRequest {
            messages: request
                .messages
                .iter()
                .map(|m| WorkersAiMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
        }
    }
}

/// Pull the completion text out of a response body.
///
/// The `{result: {response}}` envelope is the primary contract; a bare
/// `{response}` object is accepted, and anything else falls back to the
/// raw body text as a best effort.
pub(crate) fn extract_response_text(body: &str) -> Result<String, LlmError> {
    if let Ok(envelope) = serde_json::from_str::<WorkersAiEnvelope>(body) {
        if let Some(text) = envelope.result.and_then(|r| r.response) {
            return Ok(text);
        }
        if !envelope.errors.is_empty() {
            return Err(LlmError::Provider {
                message: envelope.errors[0].message.clone(),
            });
        }
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(text) = value.get("response").and_then(|v| v.as_str()) {
            return Ok(text.to_string());
        }
    }

    Ok(body.to_string())
}

// WorkersAiProvider intentionally does NOT derive Debug so the token can
// never be printed through it.

impl InferenceProvider for WorkersAiProvider {
    fn name(&self) -> &str {
        "workers-ai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_workers_ai_request(request);

        let response = self
            .client
            .post(self.run_url())
            .bearer_auth(self.api_token.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to read response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                400 => LlmError::InvalidRequest(text),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {text}"),
                },
            });
        }

        let response = extract_response_text(&text)?;
        Ok(CompletionResponse { response })
    }
}
