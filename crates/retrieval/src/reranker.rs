//! Cross-encoder reranking stage
//!
//! Re-scores (query, candidate) pairs and reorders the list independently of
//! the vector store's similarity ordering. The final rank is rerank score
//! descending; ties keep the vector-store order so identical inputs always
//! produce identical output.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use shop_agent_core::{Candidate, PairScorer, Result};

use crate::RetrievalError;

/// Rerank configuration
#[derive(Debug, Clone)]
pub struct RerankConfig {
    /// Final list length after reranking
    pub top_k: usize,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// A candidate with its cross-encoder score.
///
/// `rerank_score` is unbounded; higher means more relevant. The similarity
/// score stays available on the inner candidate but no longer drives rank.
#[derive(Debug, Clone)]
pub struct RerankedCandidate {
    pub candidate: Candidate,
    pub rerank_score: f32,
}

/// Stage statistics, kept for monitoring.
#[derive(Debug, Clone, Default)]
pub struct RerankStats {
    /// Total rerank calls
    pub total_calls: usize,
    /// Candidates scored across all calls
    pub total_candidates: usize,
    /// Calls that short-circuited on empty input
    pub empty_inputs: usize,
}

/// Reranking stage over a pairwise scorer.
pub struct RerankStage {
    scorer: Arc<dyn PairScorer>,
    config: RerankConfig,
    stats: Mutex<RerankStats>,
}

impl RerankStage {
    pub fn new(scorer: Arc<dyn PairScorer>, config: RerankConfig) -> Self {
        Self {
            scorer,
            config,
            stats: Mutex::new(RerankStats::default()),
        }
    }

    /// Rerank candidates for a query, truncated to `top_k`.
    ///
    /// An empty candidate list returns immediately without invoking the
    /// scoring model.
    pub async fn rerank(
        &self,
        query: &str,
        candidates: Vec<Candidate>,
    ) -> std::result::Result<Vec<RerankedCandidate>, RetrievalError> {
        if candidates.is_empty() {
            let mut stats = self.stats.lock();
            stats.total_calls += 1;
            stats.empty_inputs += 1;
            return Ok(Vec::new());
        }

        let texts: Vec<String> = candidates.iter().map(|c| c.content.clone()).collect();

        let scores = self
            .scorer
            .score(query, &texts)
            .await
            .map_err(|e| RetrievalError::Reranker(e.to_string()))?;

        if scores.len() != candidates.len() {
            return Err(RetrievalError::Reranker(format!(
                "scorer returned {} scores for {} candidates",
                scores.len(),
                candidates.len()
            )));
        }

        let mut ranked: Vec<RerankedCandidate> = candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, rerank_score)| RerankedCandidate {
                candidate,
                rerank_score,
            })
            .collect();

        // sort_by is stable: equal scores keep the similarity ordering
        ranked.sort_by(|a, b| b.rerank_score.total_cmp(&a.rerank_score));
        ranked.truncate(self.config.top_k);

        let mut stats = self.stats.lock();
        stats.total_calls += 1;
        stats.total_candidates += texts.len();

        tracing::debug!(
            model = self.scorer.model_name(),
            scored = texts.len(),
            kept = ranked.len(),
            "rerank complete"
        );

        Ok(ranked)
    }

    pub fn stats(&self) -> RerankStats {
        self.stats.lock().clone()
    }
}

/// Keyword-overlap scorer, usable when no cross-encoder is deployed.
///
/// Jaccard overlap of whitespace tokens. Cheap and deterministic; nowhere
/// near a real cross-encoder in quality.
pub struct KeywordScorer;

impl KeywordScorer {
    fn overlap(query: &str, document: &str) -> f32 {
        let query_lower = query.to_lowercase();
        let doc_lower = document.to_lowercase();

        let query_words: std::collections::HashSet<&str> =
            query_lower.split_whitespace().collect();
        let doc_words: std::collections::HashSet<&str> =
            doc_lower.split_whitespace().collect();

        let overlap = query_words.intersection(&doc_words).count();
        let union = query_words.union(&doc_words).count();

        if union > 0 {
            overlap as f32 / union as f32
        } else {
            0.0
        }
    }
}

#[async_trait]
impl PairScorer for KeywordScorer {
    async fn score(&self, query: &str, texts: &[String]) -> Result<Vec<f32>> {
        Ok(texts.iter().map(|t| Self::overlap(query, t)).collect())
    }

    fn model_name(&self) -> &str {
        "keyword-overlap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer that panics when invoked; proves the empty-input short-circuit.
    struct UnreachableScorer;

    #[async_trait]
    impl PairScorer for UnreachableScorer {
        async fn score(&self, _query: &str, _texts: &[String]) -> Result<Vec<f32>> {
            panic!("scorer must not be invoked");
        }

        fn model_name(&self) -> &str {
            "unreachable"
        }
    }

    /// Scorer that replays a fixed score list.
    struct CannedScorer(Vec<f32>);

    #[async_trait]
    impl PairScorer for CannedScorer {
        async fn score(&self, _query: &str, texts: &[String]) -> Result<Vec<f32>> {
            Ok(self.0.iter().take(texts.len()).copied().collect())
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Candidate::new(*name, 0.9 - i as f32 * 0.05)
                    .with_metadata("name", *name)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_input_skips_model() {
        let stage = RerankStage::new(Arc::new(UnreachableScorer), RerankConfig::default());
        let result = stage.rerank("bất kỳ", Vec::new()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(stage.stats().empty_inputs, 1);
    }

    #[tokio::test]
    async fn test_rerank_reorders_by_score() {
        let stage = RerankStage::new(
            Arc::new(CannedScorer(vec![0.1, 0.9, 0.5])),
            RerankConfig { top_k: 3 },
        );

        let ranked = stage
            .rerank("laptop", candidates(&["a", "b", "c"]))
            .await
            .unwrap();

        let order: Vec<&str> = ranked.iter().map(|r| r.candidate.content.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_truncates_to_top_k() {
        let stage = RerankStage::new(
            Arc::new(CannedScorer(vec![0.4, 0.3, 0.2, 0.1])),
            RerankConfig { top_k: 3 },
        );

        let ranked = stage
            .rerank("laptop", candidates(&["a", "b", "c", "d"]))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 3);
    }

    #[tokio::test]
    async fn test_equal_scores_keep_store_order() {
        let stage = RerankStage::new(
            Arc::new(CannedScorer(vec![0.5, 0.5, 0.5])),
            RerankConfig { top_k: 3 },
        );

        let ranked = stage
            .rerank("laptop", candidates(&["a", "b", "c"]))
            .await
            .unwrap();

        let order: Vec<&str> = ranked.iter().map(|r| r.candidate.content.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_deterministic_across_runs() {
        let stage = RerankStage::new(Arc::new(KeywordScorer), RerankConfig { top_k: 5 });

        let input = candidates(&[
            "iPhone 14 Pro màu tím",
            "MacBook Air M2",
            "iPhone 12 màu đen",
        ]);

        let first = stage.rerank("iPhone màu tím", input.clone()).await.unwrap();
        let second = stage.rerank("iPhone màu tím", input).await.unwrap();

        let order = |r: &[RerankedCandidate]| {
            r.iter().map(|x| x.candidate.content.clone()).collect::<Vec<_>>()
        };
        assert_eq!(order(&first), order(&second));
    }

    #[tokio::test]
    async fn test_score_count_mismatch_is_error() {
        let stage = RerankStage::new(
            Arc::new(CannedScorer(vec![0.5])),
            RerankConfig { top_k: 3 },
        );

        let err = stage
            .rerank("laptop", candidates(&["a", "b", "c"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RetrievalError::Reranker(_)));
    }

    #[test]
    fn test_keyword_overlap() {
        let score = KeywordScorer::overlap(
            "điện thoại chụp ảnh đẹp",
            "điện thoại iPhone 14 Pro chụp ảnh đẹp",
        );
        assert!(score > 0.0);
        assert_eq!(KeywordScorer::overlap("", ""), 0.0);
    }
}
