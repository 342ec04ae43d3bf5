//! Partsfinder Core Library
//!
//! LLM-refined keyword search against the DigiKey product API.
//!
//! # Flow
//! - Normalize a free-text query into a keyword phrase (one model call)
//! - Exchange client credentials for a bearer token
//! - Search, then let the model tighten the filter set round by round,
//!   capped at eight search/result pairs

pub mod config;
pub mod digikey;
pub mod engine;
pub mod error;
pub mod llm;
pub mod search;

pub use config::{Config, DigiKeyConfig, LlmServiceConfig};
pub use digikey::{
    DigiKeyClient, FilterId, FilterOptions, FilterOptionsRequest, KeywordRequest, KeywordResponse,
    PartSearch, Product, SEARCH_RESULT_LIMIT,
};
pub use engine::PartsFinder;
pub use error::{Error, PartsFinderError, Result};
pub use llm::{structured_completion, ChatMessage, LlmClient, OpenAiClient};
pub use search::{normalize_query, refine, HistoryEntry, RefinementDecision, MAX_HISTORY};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "partsfinder";
