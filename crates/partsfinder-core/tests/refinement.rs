//! Refinement loop behavior against scripted model and search backends

use async_trait::async_trait;
use partsfinder_core::{
    normalize_query, refine, ChatMessage, Config, DigiKeyConfig, FilterId, FilterOptionsRequest,
    KeywordResponse, LlmClient, PartSearch, PartsFinder, PartsFinderError, Result, MAX_HISTORY,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// LLM stub replaying a fixed sequence of replies
struct ScriptedLlm {
    replies: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(String::from).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replies with the same refinement decision forever
    fn repeating(reply: &str) -> Self {
        let mut replies = VecDeque::new();
        for _ in 0..64 {
            replies.push_back(reply.to_string());
        }
        Self {
            replies: Mutex::new(replies),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn chat_completion(&self, _messages: Vec<ChatMessage>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PartsFinderError::ModelContract("script exhausted".to_string()))
    }
}

/// Search stub recording every call it receives
struct RecordingSearch {
    fail_token: bool,
    token_calls: AtomicUsize,
    search_calls: AtomicUsize,
    filters_seen: Mutex<Vec<Option<FilterOptionsRequest>>>,
    products_count: i64,
}

impl RecordingSearch {
    fn new(products_count: i64) -> Self {
        Self {
            fail_token: false,
            token_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            filters_seen: Mutex::new(Vec::new()),
            products_count,
        }
    }

    fn with_failing_token() -> Self {
        Self {
            fail_token: true,
            ..Self::new(0)
        }
    }

    fn search_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PartSearch for RecordingSearch {
    async fn fetch_token(&self) -> Result<String> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_token {
            return Err(PartsFinderError::ExternalService(
                "Failed to get access token: 401 Unauthorized".to_string(),
            ));
        }
        Ok("test-token".to_string())
    }

    async fn keyword_search(
        &self,
        _keywords: &str,
        _access_token: &str,
        filter: Option<FilterOptionsRequest>,
    ) -> Result<KeywordResponse> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.filters_seen.lock().unwrap().push(filter);
        Ok(KeywordResponse {
            products_count: Some(self.products_count),
            ..KeywordResponse::default()
        })
    }
}

fn manufacturer_filter_reply() -> &'static str {
    r#"{
        "done": false,
        "reason": "restricting to the matching manufacturer",
        "newFilters": {"ManufacturerFilter": [{"Id": "1882"}]}
    }"#
}

#[tokio::test]
async fn normalizer_makes_exactly_one_model_call() {
    let llm = ScriptedLlm::new(vec![r#"{"query": "10k resistor 0603"}"#]);

    let keywords = normalize_query(&llm, "I need a 10k pullup for my 0603 board")
        .await
        .unwrap();

    assert_eq!(keywords, "10k resistor 0603");
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn normalizer_fails_on_malformed_reply_without_retry() {
    let llm = ScriptedLlm::new(vec!["not json at all"]);

    let err = normalize_query(&llm, "anything").await.unwrap_err();

    assert!(matches!(err, PartsFinderError::ModelContract(_)));
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn history_never_exceeds_cap() {
    // Model never stops proposing filters; the cap must end the loop.
    let llm = ScriptedLlm::repeating(manufacturer_filter_reply());
    let search = RecordingSearch::new(500);

    refine(&search, &llm, "10k resistor", "10k resistor", "tok")
        .await
        .unwrap();

    // Seed search plus one per refinement round up to the cap.
    assert_eq!(search.search_count(), MAX_HISTORY);
    assert_eq!(llm.call_count(), MAX_HISTORY - 1);
}

#[tokio::test]
async fn loop_stops_when_model_is_done() {
    let llm = ScriptedLlm::new(vec![
        r#"{"done": true, "reason": "top results all match", "newFilters": {"ManufacturerFilter": [{"Id": "1882"}]}}"#,
    ]);
    let search = RecordingSearch::new(12);

    refine(&search, &llm, "q", "q", "tok").await.unwrap();

    // done wins even though a filter set was proposed alongside it
    assert_eq!(search.search_count(), 1);
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn loop_stops_when_no_filters_proposed() {
    let llm = ScriptedLlm::new(vec![r#"{"done": false, "reason": "nothing left to try"}"#]);
    let search = RecordingSearch::new(12);

    refine(&search, &llm, "q", "q", "tok").await.unwrap();

    assert_eq!(search.search_count(), 1);
}

#[tokio::test]
async fn proposed_filter_passes_through_unmodified() {
    let llm = ScriptedLlm::new(vec![
        manufacturer_filter_reply(),
        r#"{"done": true, "reason": "good"}"#,
    ]);
    let search = RecordingSearch::new(500);

    refine(&search, &llm, "q", "q", "tok").await.unwrap();

    let filters = search.filters_seen.lock().unwrap();
    assert_eq!(filters.len(), 2);
    assert!(filters[0].is_none());
    assert_eq!(
        filters[1],
        Some(FilterOptionsRequest {
            manufacturer_filter: Some(vec![FilterId {
                id: "1882".to_string()
            }]),
            ..FilterOptionsRequest::default()
        })
    );
}

#[tokio::test]
async fn zero_match_seed_still_asks_for_refinement() {
    let llm = ScriptedLlm::new(vec![r#"{"done": true, "reason": "nothing to filter"}"#]);
    let search = RecordingSearch::new(0);

    refine(&search, &llm, "q", "q", "tok").await.unwrap();

    // No local stop-if-empty short circuit; the model is still consulted.
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn failed_token_fetch_prevents_any_search() {
    let llm = ScriptedLlm::new(vec![r#"{"query": "stm32"}"#]);
    let search = Arc::new(RecordingSearch::with_failing_token());
    let finder = PartsFinder::with_clients(search.clone(), Arc::new(llm));

    let err = finder.query("an stm32 dev board").await.unwrap_err();

    assert!(matches!(err, PartsFinderError::ExternalService(_)));
    assert_eq!(search.search_count(), 0);
}

#[tokio::test]
async fn malformed_refinement_reply_aborts_invocation() {
    let llm = ScriptedLlm::new(vec![
        r#"{"query": "stm32"}"#,
        r#"{"done": "yes-ish", "reason": 3}"#,
    ]);
    let search = Arc::new(RecordingSearch::new(100));
    let finder = PartsFinder::with_clients(search.clone(), Arc::new(llm));

    let err = finder.query("an stm32 dev board").await.unwrap_err();

    assert!(matches!(err, PartsFinderError::ModelContract(_)));
    assert_eq!(search.search_count(), 1);
}

#[tokio::test]
async fn full_invocation_returns_last_round_response() {
    let llm = ScriptedLlm::new(vec![
        r#"{"query": "blue led 0805"}"#,
        manufacturer_filter_reply(),
        r#"{"done": true, "reason": "all results are blue 0805 LEDs"}"#,
    ]);
    let search = Arc::new(RecordingSearch::new(37));
    let finder = PartsFinder::with_clients(search.clone(), Arc::new(llm));

    let response = finder.query("a blue LED in an 0805 package").await.unwrap();

    assert_eq!(response.products_count, Some(37));
    assert_eq!(search.search_count(), 2);
}

#[test]
fn missing_credentials_fail_before_any_network_call() {
    let config = Config {
        digikey: DigiKeyConfig {
            client_id: None,
            client_secret: None,
            ..DigiKeyConfig::default()
        },
        ..Config::default()
    };

    let err = PartsFinder::new(config).unwrap_err();
    assert!(matches!(err, PartsFinderError::Config(_)));
}
