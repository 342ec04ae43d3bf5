//! Structured completions: typed single-shot model calls
//!
//! A structured completion is a chat completion whose output must parse
//! into a predeclared shape. A response that does not match the shape
//! is a model contract violation and fails the invocation; there is no
//! retry and no repair attempt.

use crate::error::{PartsFinderError, Result};
use crate::llm::client::{ChatMessage, LlmClient};
use serde::de::DeserializeOwned;

/// Issue one chat completion and parse the reply into `T`.
pub async fn structured_completion<T: DeserializeOwned>(
    llm: &dyn LlmClient,
    system: &str,
    prompt: String,
) -> Result<T> {
    let messages = vec![ChatMessage::system(system), ChatMessage::user(prompt)];

    let response = llm.chat_completion(messages).await?;

    parse_structured(&response)
}

/// Extract and parse the JSON object embedded in a model reply.
///
/// Models routinely wrap JSON in markdown fences or prose, so the
/// outermost brace span is taken before parsing.
fn parse_structured<T: DeserializeOwned>(response: &str) -> Result<T> {
    let json_str = match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if start < end => &response[start..=end],
        _ => {
            tracing::warn!("Model reply contains no JSON object");
            return Err(PartsFinderError::ModelContract(
                "response contains no JSON object".to_string(),
            ));
        }
    };

    serde_json::from_str(json_str).map_err(|e| {
        tracing::warn!("Model reply failed schema parse: {}", e);
        PartsFinderError::ModelContract(format!("response does not match schema: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Shape {
        query: String,
    }

    #[test]
    fn parses_bare_json() {
        let shape: Shape = parse_structured(r#"{"query": "10k resistor"}"#).unwrap();
        assert_eq!(shape.query, "10k resistor");
    }

    #[test]
    fn parses_fenced_json() {
        let reply = "Here you go:\n```json\n{\"query\": \"stm32\"}\n```\n";
        let shape: Shape = parse_structured(reply).unwrap();
        assert_eq!(shape.query, "stm32");
    }

    #[test]
    fn rejects_missing_json() {
        let err = parse_structured::<Shape>("no json here").unwrap_err();
        assert!(matches!(err, PartsFinderError::ModelContract(_)));
    }

    #[test]
    fn rejects_schema_mismatch() {
        let err = parse_structured::<Shape>(r#"{"other": 1}"#).unwrap_err();
        assert!(matches!(err, PartsFinderError::ModelContract(_)));
    }
}
