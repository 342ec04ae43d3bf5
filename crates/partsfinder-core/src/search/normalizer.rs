//! Query normalizer: free text to a literal keyword phrase

use crate::error::Result;
use crate::llm::{structured_completion, LlmClient};
use serde::Deserialize;

const NORMALIZER_SYSTEM: &str = "You are a search query normalizer for an electronic parts \
     search engine. Output ONLY valid JSON with a single field: query (string).";

/// Output shape of the normalizer completion
#[derive(Debug, Deserialize)]
struct NormalizedQuery {
    query: String,
}

/// Reduce a free-text part search to a short keyword phrase.
///
/// Issues exactly one model call. A reply that does not match the
/// output shape fails the invocation.
pub async fn normalize_query(llm: &dyn LlmClient, raw_query: &str) -> Result<String> {
    let prompt = build_normalizer_prompt(raw_query);

    let normalized: NormalizedQuery =
        structured_completion(llm, NORMALIZER_SYSTEM, prompt).await?;

    tracing::debug!(keywords = %normalized.query, "normalized query");

    Ok(normalized.query)
}

fn build_normalizer_prompt(raw_query: &str) -> String {
    format!(
        r#"The user is trying to search DigiKey for electronic parts.
The DigiKey search system is pretty rudimentary, so please break the query into a basic keyword or phrase that can be used.
We will refine the search later. Here is the user's search query:

{}

Output JSON: {{"query": "<keyword phrase>"}}"#,
        raw_query
    )
}
