//! Retrieval pipeline settings

use serde::{Deserialize, Serialize};

/// Settings for the semantic retrieval path.
///
/// The source system never converged on one threshold/k pair, so both are
/// configuration: search wide, rerank down to a short list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalSettings {
    /// Candidates requested from the vector store
    #[serde(default = "default_search_k")]
    pub search_k: usize,

    /// Minimum similarity score in [0, 1]; candidates below are excluded
    /// entirely, not down-ranked
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,

    /// Final list length after reranking
    #[serde(default = "default_rerank_top_k")]
    pub rerank_top_k: usize,
}

fn default_search_k() -> usize {
    5
}
fn default_score_threshold() -> f32 {
    0.7
}
fn default_rerank_top_k() -> usize {
    3
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            search_k: default_search_k(),
            score_threshold: default_score_threshold(),
            rerank_top_k: default_rerank_top_k(),
        }
    }
}
