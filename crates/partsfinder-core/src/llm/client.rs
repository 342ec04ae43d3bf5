//! HTTP client for external LLM services (vLLM, OpenAI, etc.)

use crate::config::LlmServiceConfig;
use crate::error::{PartsFinderError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Trait for LLM service clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate chat completion
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat completions client
pub struct OpenAiClient {
    http_client: reqwest::Client,
    config: LlmServiceConfig,
}

impl OpenAiClient {
    /// Create new client from configuration
    pub fn new(config: LlmServiceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(PartsFinderError::Http)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(LlmServiceConfig::default())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest {
            model: String,
            messages: Vec<ChatMessage>,
            temperature: f32,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessage,
        }

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: 0.2,
            max_tokens: 2048,
        };

        let url = format!("{}/v1/chat/completions", self.config.url);

        let mut req = self.http_client.post(&url).json(&request);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PartsFinderError::ExternalService(format!(
                "LLM service error (HTTP {}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .first()
            .ok_or_else(|| PartsFinderError::ModelContract("No response from LLM".to_string()))?
            .message
            .content
            .clone();

        Ok(content)
    }
}
