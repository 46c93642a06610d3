//! Hybrid retrieval for the shop agent
//!
//! Features:
//! - Vector store adapter with hard score-threshold filtering
//! - Cross-encoder reranking with stable ordering and top-k truncation
//! - Keyword-overlap fallback scorer (no model required)
//! - Variant deduplication by product name
//! - A two-step fallback orchestrator (structured SQL first, semantic
//!   second) with an exception-free public contract

pub mod dedup;
pub mod orchestrator;
pub mod reranker;
pub mod vector_store;

pub use dedup::deduplicate;
pub use orchestrator::ProductLookup;
pub use reranker::{
    KeywordScorer, RerankConfig, RerankStage, RerankStats, RerankedCandidate,
};
pub use vector_store::{SearchConfig, VectorStoreAdapter};

use thiserror::Error;

/// Retrieval errors
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Reranker error: {0}")]
    Reranker(String),
}

impl From<RetrievalError> for shop_agent_core::Error {
    fn from(err: RetrievalError) -> Self {
        match err {
            RetrievalError::Embedding(e) => shop_agent_core::Error::Embedding(e),
            RetrievalError::VectorStore(e) => shop_agent_core::Error::VectorStore(e),
            RetrievalError::Reranker(e) => shop_agent_core::Error::Reranker(e),
        }
    }
}
