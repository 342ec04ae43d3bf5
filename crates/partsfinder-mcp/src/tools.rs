//! MCP tool definitions and handlers

use crate::protocol::*;
use anyhow::Result;
use partsfinder_core::PartsFinder;
use serde_json::Value;

pub fn query_digikey_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "query_digikey".to_string(),
        description: "Query DigiKey for electronic parts. Takes a free-text part description, \
             normalizes it into keywords, and iteratively refines API filters until the \
             results match the query."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text description of the part to search for"
                }
            },
            "required": ["query"]
        }),
    }
}

pub async fn handle_query_digikey(finder: &PartsFinder, arguments: Value) -> Result<ToolResult> {
    let query = arguments
        .get("query")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing required argument: query"))?;

    tracing::info!(query, "query_digikey tool call");

    let response = finder.query(query).await?;

    Ok(ToolResult {
        content: vec![Content::Text {
            text: serde_json::to_string(&response)?,
        }],
        is_error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use partsfinder_core::{
        ChatMessage, FilterOptionsRequest, KeywordResponse, LlmClient, PartSearch,
        PartsFinderError,
    };
    use std::sync::Arc;

    struct StubLlm;

    #[async_trait]
    impl LlmClient for StubLlm {
        async fn chat_completion(
            &self,
            _messages: Vec<ChatMessage>,
        ) -> partsfinder_core::Result<String> {
            Ok(r#"{"query": "resistor", "done": true, "reason": "stub"}"#.to_string())
        }
    }

    struct StubSearch;

    #[async_trait]
    impl PartSearch for StubSearch {
        async fn fetch_token(&self) -> partsfinder_core::Result<String> {
            Ok("tok".to_string())
        }

        async fn keyword_search(
            &self,
            _keywords: &str,
            _access_token: &str,
            _filter: Option<FilterOptionsRequest>,
        ) -> partsfinder_core::Result<KeywordResponse> {
            Ok(KeywordResponse {
                products_count: Some(3),
                ..KeywordResponse::default()
            })
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl PartSearch for FailingSearch {
        async fn fetch_token(&self) -> partsfinder_core::Result<String> {
            Err(PartsFinderError::ExternalService(
                "Failed to get access token: 401 Unauthorized".to_string(),
            ))
        }

        async fn keyword_search(
            &self,
            _keywords: &str,
            _access_token: &str,
            _filter: Option<FilterOptionsRequest>,
        ) -> partsfinder_core::Result<KeywordResponse> {
            unreachable!("no search after failed token fetch")
        }
    }

    #[test]
    fn tool_definition_requires_query() {
        let definition = query_digikey_tool_definition();
        assert_eq!(definition.name, "query_digikey");
        assert_eq!(definition.input_schema["required"][0], "query");
        assert_eq!(
            definition.input_schema["properties"]["query"]["type"],
            "string"
        );
    }

    #[tokio::test]
    async fn handler_returns_serialized_response() {
        let finder = PartsFinder::with_clients(Arc::new(StubSearch), Arc::new(StubLlm));
        let result = handle_query_digikey(&finder, serde_json::json!({"query": "a resistor"}))
            .await
            .unwrap();

        let Content::Text { text } = &result.content[0];
        let response: KeywordResponse = serde_json::from_str(text).unwrap();
        assert_eq!(response.products_count, Some(3));
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn handler_rejects_missing_query_argument() {
        let finder = PartsFinder::with_clients(Arc::new(StubSearch), Arc::new(StubLlm));
        let err = handle_query_digikey(&finder, serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[tokio::test]
    async fn handler_propagates_invocation_failure() {
        let finder = PartsFinder::with_clients(Arc::new(FailingSearch), Arc::new(StubLlm));
        let err = handle_query_digikey(&finder, serde_json::json!({"query": "x"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
