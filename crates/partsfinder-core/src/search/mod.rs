//! Query normalization and LLM-guided search refinement

pub mod normalizer;
pub mod refine;

pub use normalizer::normalize_query;
pub use refine::{refine, HistoryEntry, RefinementDecision, MAX_HISTORY};
