//! Global configuration types for Clarity Relay.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! listen address and the inference upstream. All fields have sensible
//! defaults so a missing file yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the relay.
///
/// Loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Inference upstream settings.
    #[serde(default)]
    pub inference: InferenceConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            inference: InferenceConfig::default(),
        }
    }
}

/// Settings for the hosted inference API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Model identifier passed to the upstream.
    #[serde(default = "default_model")]
    pub model: String,

    /// Generation cap per completion, in output tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Cloudflare account id the Workers AI endpoint is scoped to.
    #[serde(default)]
    pub account_id: Option<String>,

    /// Override the default API base URL (useful for proxies and tests).
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "@cf/meta/llama-3.3-70b-instruct-fp8-fast".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            account_id: None,
            base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8787);
        assert_eq!(config.inference.max_tokens, 1024);
        assert!(config.inference.account_id.is_none());
    }

    #[test]
    fn test_global_config_deserialize_empty_toml() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 8787);
        assert_eq!(
            config.inference.model,
            "@cf/meta/llama-3.3-70b-instruct-fp8-fast"
        );
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
host = "0.0.0.0"
port = 9000

[inference]
model = "@cf/meta/llama-3.1-8b-instruct"
max_tokens = 512
account_id = "abc123"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.inference.model, "@cf/meta/llama-3.1-8b-instruct");
        assert_eq!(config.inference.max_tokens, 512);
        assert_eq!(config.inference.account_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let config = GlobalConfig {
            host: "::1".to_string(),
            port: 3000,
            inference: InferenceConfig {
                base_url: Some("http://localhost:9999".to_string()),
                ..InferenceConfig::default()
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.port, 3000);
        assert_eq!(
            parsed.inference.base_url.as_deref(),
            Some("http://localhost:9999")
        );
    }
}
