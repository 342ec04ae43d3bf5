//! Invocation entry point: normalize, authenticate, refine

use crate::config::Config;
use crate::digikey::{DigiKeyClient, KeywordResponse, PartSearch};
use crate::error::Result;
use crate::llm::{LlmClient, OpenAiClient};
use crate::search::{normalize_query, refine};
use std::sync::Arc;

/// One-query-in, one-result-out search engine.
///
/// Owns no state between invocations; each `query` call runs its own
/// normalize, token fetch, and refinement rounds in strict sequence.
pub struct PartsFinder {
    search: Arc<dyn PartSearch>,
    llm: Arc<dyn LlmClient>,
}

impl std::fmt::Debug for PartsFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartsFinder").finish_non_exhaustive()
    }
}

impl PartsFinder {
    /// Create from configuration.
    ///
    /// Fails on absent DigiKey credentials before any network call.
    pub fn new(config: Config) -> Result<Self> {
        let search = DigiKeyClient::new(config.digikey)?;
        let llm = OpenAiClient::new(config.llm_service)?;
        Ok(Self {
            search: Arc::new(search),
            llm: Arc::new(llm),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Config::load()?)
    }

    /// Create with explicit backends, used by tests
    pub fn with_clients(search: Arc<dyn PartSearch>, llm: Arc<dyn LlmClient>) -> Self {
        Self { search, llm }
    }

    /// Run one full search invocation for a free-text query.
    ///
    /// Any failed step aborts the invocation; no partial result is
    /// returned.
    pub async fn query(&self, raw_query: &str) -> Result<KeywordResponse> {
        let keywords = normalize_query(self.llm.as_ref(), raw_query).await?;
        let access_token = self.search.fetch_token().await?;
        refine(
            self.search.as_ref(),
            self.llm.as_ref(),
            raw_query,
            &keywords,
            &access_token,
        )
        .await
    }
}
