//! Vector store adapter
//!
//! Embeds the query once, issues a single nearest-neighbor search, filters
//! by the score threshold, and returns candidates in similarity-descending
//! order. Reranking is deliberately a separate stage so recall (threshold)
//! and relevance sharpening (cross-encoder) can be tuned and benchmarked
//! independently.

use std::sync::Arc;

use shop_agent_core::{Candidate, Embedder, SimilaritySearch};

use crate::RetrievalError;

/// Search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Candidates requested from the backend
    pub k: usize,
    /// Minimum similarity in [0, 1]; candidates below are excluded entirely
    pub score_threshold: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 5,
            score_threshold: 0.7,
        }
    }
}

/// Read-only adapter over an embedding provider and a similarity-search
/// backend.
pub struct VectorStoreAdapter {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn SimilaritySearch>,
    config: SearchConfig,
}

impl VectorStoreAdapter {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn SimilaritySearch>,
        config: SearchConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            config,
        }
    }

    /// Search for candidates above the score threshold.
    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, RetrievalError> {
        let vector = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| RetrievalError::Embedding(e.to_string()))?;

        let mut candidates = self
            .store
            .search(&vector, self.config.k)
            .await
            .map_err(|e| RetrievalError::VectorStore(e.to_string()))?;

        let returned = candidates.len();
        candidates.retain(|c| c.similarity >= self.config.score_threshold);
        candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        tracing::debug!(
            returned,
            retained = candidates.len(),
            threshold = self.config.score_threshold,
            "vector search complete"
        );

        Ok(candidates)
    }
}
