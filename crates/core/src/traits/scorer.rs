//! Pairwise relevance scoring trait

use async_trait::async_trait;

use crate::Result;

/// Cross-encoder style scorer for (query, document) pairs.
///
/// Scores are unbounded, higher means more relevant, and each pair is scored
/// independently of the others (order-invariant, no pairwise comparison).
#[async_trait]
pub trait PairScorer: Send + Sync + 'static {
    /// Score every `(query, text)` pair; the returned vector matches `texts`
    /// by index.
    async fn score(&self, query: &str, texts: &[String]) -> Result<Vec<f32>>;

    /// Model name for logging.
    fn model_name(&self) -> &str;
}
