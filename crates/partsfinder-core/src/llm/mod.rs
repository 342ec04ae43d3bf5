//! LLM integration for query normalization and filter refinement

pub mod client;
pub mod structured;

pub use client::{ChatMessage, LlmClient, OpenAiClient};
pub use structured::structured_completion;
