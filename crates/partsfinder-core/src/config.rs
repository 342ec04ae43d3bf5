//! Configuration management

use crate::error::{PartsFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// DigiKey API credentials and endpoints
    #[serde(default)]
    pub digikey: DigiKeyConfig,

    /// LLM service configuration
    #[serde(default)]
    pub llm_service: LlmServiceConfig,
}

/// DigiKey API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigiKeyConfig {
    /// OAuth2 client id, also sent as the X-DIGIKEY-Client-Id header
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth2 client secret
    #[serde(default)]
    pub client_secret: Option<String>,

    /// API base URL (production by default, override for sandbox)
    #[serde(default = "default_digikey_base_url")]
    pub base_url: String,

    /// Two letter language code for the X-DIGIKEY-Locale-Language header
    #[serde(default)]
    pub locale_language: Option<String>,

    /// Three letter currency code for the X-DIGIKEY-Locale-Currency header
    #[serde(default)]
    pub locale_currency: Option<String>,

    /// Two letter site code for the X-DIGIKEY-Locale-Site header
    #[serde(default)]
    pub locale_site: Option<String>,

    /// Customer id for accounts with multiple regional ids
    #[serde(default)]
    pub customer_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for DigiKeyConfig {
    fn default() -> Self {
        Self {
            client_id: std::env::var("DIGIKEY_CLIENT_ID").ok(),
            client_secret: std::env::var("DIGIKEY_CLIENT_SECRET").ok(),
            base_url: std::env::var("DIGIKEY_BASE_URL")
                .unwrap_or_else(|_| default_digikey_base_url()),
            locale_language: std::env::var("DIGIKEY_LOCALE_LANGUAGE").ok(),
            locale_currency: std::env::var("DIGIKEY_LOCALE_CURRENCY").ok(),
            locale_site: std::env::var("DIGIKEY_LOCALE_SITE").ok(),
            customer_id: std::env::var("DIGIKEY_CUSTOMER_ID").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

impl DigiKeyConfig {
    /// Check that both credentials are present and non-empty.
    ///
    /// Called before any network traffic so a misconfigured process
    /// fails without touching the token endpoint.
    pub fn validate(&self) -> Result<(String, String)> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                PartsFinderError::Config("DigiKey API credentials are not configured".to_string())
            })?;
        let client_secret = self
            .client_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                PartsFinderError::Config("DigiKey API credentials are not configured".to_string())
            })?;
        Ok((client_id.to_string(), client_secret.to_string()))
    }
}

/// LLM service configuration for external inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmServiceConfig {
    /// Base URL of the OpenAI-compatible chat completions service
    pub url: String,

    /// Model name for chat completions
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// API key (optional, for authenticated services)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("PARTSFINDER_LLM_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            model: default_chat_model(),
            api_key: std::env::var("PARTSFINDER_LLM_API_KEY").ok(),
            timeout_secs: std::env::var("PARTSFINDER_LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }
}

fn default_chat_model() -> String {
    std::env::var("PARTSFINDER_LLM_MODEL")
        .unwrap_or_else(|_| "meta-llama/Llama-3.1-8B-Instruct".to_string())
}

fn default_digikey_base_url() -> String {
    "https://api.digikey.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load config from the default path, falling back to env-derived defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from a specific path, falling back to env-derived defaults
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_credentials() {
        let config = DigiKeyConfig {
            client_id: None,
            client_secret: Some("secret".to_string()),
            ..DigiKeyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PartsFinderError::Config(_))
        ));
    }

    #[test]
    fn validate_rejects_empty_credentials() {
        let config = DigiKeyConfig {
            client_id: Some("id".to_string()),
            client_secret: Some(String::new()),
            ..DigiKeyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_parses_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(
            &path,
            "digikey:\n  client_id: file-id\n  client_secret: file-secret\nllm_service:\n  url: http://inference.local:8000\n  model: test-model\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.digikey.client_id.as_deref(), Some("file-id"));
        assert_eq!(config.llm_service.url, "http://inference.local:8000");
        assert_eq!(config.llm_service.model, "test-model");
        // Unspecified fields fall back to defaults
        assert_eq!(config.digikey.base_url, "https://api.digikey.com");
    }

    #[test]
    fn validate_returns_both_credentials() {
        let config = DigiKeyConfig {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            ..DigiKeyConfig::default()
        };
        let (id, secret) = config.validate().unwrap();
        assert_eq!(id, "id");
        assert_eq!(secret, "secret");
    }
}
