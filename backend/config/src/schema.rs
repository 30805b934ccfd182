//! Environment-supplied runtime configuration.
//!
//! Everything the relay needs to reach the upstream text-generation backend
//! comes from `ARIA_*` environment variables, with defaults matching a local
//! OpenAI-compatible server.

use std::collections::HashMap;

use serde::Deserialize;

/// Configuration for the gateway and its upstream backend call.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// OpenAI-compatible base URL (no trailing slash, includes `/v1` if the
    /// upstream expects it)
    pub base_url: String,
    /// Bearer API key sent to the upstream
    pub api_key: String,
    /// Fixed model identifier
    pub model: String,
    /// Log level when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            base_url: "http://localhost:8000/v1".to_string(),
            api_key: "sk-local".to_string(),
            model: "qwen3-4b".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_map(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();
        Self {
            bind_address: get("ARIA_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: get("ARIA_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            base_url: get("ARIA_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key: get("ARIA_API_KEY").unwrap_or(defaults.api_key),
            model: get("ARIA_MODEL").unwrap_or(defaults.model),
            log_level: get("ARIA_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Full URL of the upstream chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = RelayConfig::from_map(&HashMap::new());
        assert_eq!(config.port, 3000);
        assert_eq!(config.model, "qwen3-4b");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn env_overrides_defaults() {
        let config = RelayConfig::from_map(&vars(&[
            ("ARIA_PORT", "4100"),
            ("ARIA_MODEL", "my-model"),
            ("ARIA_API_KEY", "sk-test"),
        ]));
        assert_eq!(config.port, 4100);
        assert_eq!(config.model, "my-model");
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = RelayConfig::from_map(&vars(&[("ARIA_PORT", "not-a-port")]));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = RelayConfig::from_map(&vars(&[("ARIA_BASE_URL", "https://api.example.com/v1/")]));
        assert_eq!(
            config.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }
}
