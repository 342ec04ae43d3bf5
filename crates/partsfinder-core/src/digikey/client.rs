//! HTTP client for the DigiKey product search API

use crate::config::DigiKeyConfig;
use crate::digikey::schema::{FilterOptionsRequest, KeywordRequest, KeywordResponse};
use crate::error::{PartsFinderError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Fixed result limit for every keyword search call
pub const SEARCH_RESULT_LIMIT: i64 = 10;

/// Trait for the parts search backend
#[async_trait]
pub trait PartSearch: Send + Sync {
    /// Exchange client credentials for a bearer token
    async fn fetch_token(&self) -> Result<String>;

    /// Run one keyword search with an optional filter set
    async fn keyword_search(
        &self,
        keywords: &str,
        access_token: &str,
        filter: Option<FilterOptionsRequest>,
    ) -> Result<KeywordResponse>;
}

/// DigiKey v4 API client
pub struct DigiKeyClient {
    http_client: reqwest::Client,
    config: DigiKeyConfig,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl DigiKeyClient {
    /// Create a new client from configuration.
    ///
    /// Fails with a configuration error when credentials are absent,
    /// before any network call is made.
    pub fn new(config: DigiKeyConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("partsfinder/", env!("CARGO_PKG_VERSION")))
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
        Self::new(DigiKeyConfig::default())
    }

    fn token_url(&self) -> String {
        format!("{}/v1/oauth2/token", self.config.base_url)
    }

    fn search_url(&self) -> String {
        format!("{}/products/v4/search/keyword", self.config.base_url)
    }
}

#[async_trait]
impl PartSearch for DigiKeyClient {
    async fn fetch_token(&self) -> Result<String> {
        let (client_id, client_secret) = self.config.validate()?;

        let params = [
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http_client
            .post(self.token_url())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PartsFinderError::ExternalService(format!(
                "Failed to get access token: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn keyword_search(
        &self,
        keywords: &str,
        access_token: &str,
        filter: Option<FilterOptionsRequest>,
    ) -> Result<KeywordResponse> {
        let client_id = self.config.client_id.as_deref().unwrap_or_default();

        let body = KeywordRequest {
            keywords: Some(keywords.to_string()),
            limit: Some(SEARCH_RESULT_LIMIT),
            filter_options_request: filter,
            ..KeywordRequest::default()
        };

        tracing::debug!(keywords, "DigiKey keyword search");

        let mut request = self
            .http_client
            .post(self.search_url())
            .header("Authorization", format!("Bearer {}", access_token))
            .header("X-DIGIKEY-Client-Id", client_id)
            .json(&body);

        if let Some(ref language) = self.config.locale_language {
            request = request.header("X-DIGIKEY-Locale-Language", language);
        }
        if let Some(ref currency) = self.config.locale_currency {
            request = request.header("X-DIGIKEY-Locale-Currency", currency);
        }
        if let Some(ref site) = self.config.locale_site {
            request = request.header("X-DIGIKEY-Locale-Site", site);
        }
        if let Some(ref customer_id) = self.config.customer_id {
            request = request.header("X-DIGIKEY-Customer-Id", customer_id);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PartsFinderError::ExternalService(format!(
                "Failed to search DigiKey: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let result: KeywordResponse = response.json().await?;
        Ok(result)
    }
}
