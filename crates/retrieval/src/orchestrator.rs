//! Lookup orchestration and fallback policy
//!
//! Two entry points with identical contracts: `structured_lookup` tries the
//! generated-SQL path first and falls back to semantic search when the plan
//! is empty or yields zero aggregate rows (statement errors count as zero
//! rows); `semantic_lookup` goes straight to vector search. Semantic search
//! runs at most once per call and there is no reverse fallback.
//!
//! Neither entry point ever returns an error: anything uncaught from either
//! branch becomes a zero-product response with a Vietnamese error sentence
//! in the summary.

use shop_agent_core::{LookupResponse, ProductRecord, Result};
use shop_agent_sqlgen::{BatchExecutor, BatchOutcome, QueryPlan, SqlGenerator};

use crate::dedup::deduplicate;
use crate::reranker::RerankStage;
use crate::vector_store::VectorStoreAdapter;

/// Top-level product lookup over both retrieval paths.
///
/// All transient state (candidates, plans, rows) lives and dies within one
/// call; the component handles are stateless and shared across concurrent
/// sessions.
pub struct ProductLookup {
    vector: VectorStoreAdapter,
    reranker: RerankStage,
    generator: SqlGenerator,
    executor: BatchExecutor,
}

impl ProductLookup {
    pub fn new(
        vector: VectorStoreAdapter,
        reranker: RerankStage,
        generator: SqlGenerator,
        executor: BatchExecutor,
    ) -> Self {
        Self {
            vector,
            reranker,
            generator,
            executor,
        }
    }

    /// Semantic lookup: embed, search, rerank, deduplicate.
    pub async fn semantic_lookup(&self, query: &str) -> LookupResponse {
        match self.semantic(query).await {
            Ok(products) => LookupResponse::found(products),
            Err(e) => {
                tracing::error!(error = %e, "semantic lookup failed");
                LookupResponse::failure(&e.to_string())
            }
        }
    }

    /// Structured lookup: generate SQL, execute and merge, fall back to the
    /// semantic path when nothing comes back.
    pub async fn structured_lookup(&self, query: &str) -> LookupResponse {
        match self.structured(query).await {
            Ok(products) => LookupResponse::found(products),
            Err(e) => {
                tracing::error!(error = %e, "structured lookup failed");
                LookupResponse::failure(&e.to_string())
            }
        }
    }

    async fn semantic(&self, query: &str) -> Result<Vec<ProductRecord>> {
        let candidates = self.vector.search(query).await?;
        let ranked = self.reranker.rerank(query, candidates).await?;

        let records: Vec<ProductRecord> =
            ranked.iter().map(|r| r.candidate.record()).collect();

        Ok(deduplicate(records))
    }

    async fn structured(&self, query: &str) -> Result<Vec<ProductRecord>> {
        // A generation transport failure is handled like a malformed
        // completion: no plan, so the semantic path decides.
        let plan = match self.generator.generate(query).await {
            Ok(plan) => plan,
            Err(e) => {
                tracing::warn!(error = %e, "sql generation failed, treating as no plan");
                QueryPlan::empty()
            }
        };

        if plan.is_empty() {
            tracing::debug!("no structured plan, falling back to semantic search");
            return self.semantic(query).await;
        }

        match self.executor.execute_and_merge(&plan).await {
            BatchOutcome::Rows(rows) => {
                let records: Vec<ProductRecord> =
                    rows.iter().filter_map(ProductRecord::from_row).collect();
                Ok(deduplicate(records))
            }
            BatchOutcome::Empty => {
                tracing::debug!("structured path returned no rows, falling back to semantic search");
                self.semantic(query).await
            }
            BatchOutcome::Failed(reason) => {
                tracing::warn!(reason = %reason, "all statements failed, falling back to semantic search");
                self.semantic(query).await
            }
        }
    }
}
