//! Similarity search trait and the candidate type it yields

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::product::ProductRecord;
use crate::Result;

/// A product document returned by similarity search, pre-reranking.
///
/// Created per-query and discarded after response formatting; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Document text the embedding was computed over
    pub content: String,
    /// Product-shaped metadata stored alongside the vector
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Similarity score in [0, 1], higher is closer
    pub similarity: f32,
}

impl Candidate {
    pub fn new(content: impl Into<String>, similarity: f32) -> Self {
        Self {
            content: content.into(),
            metadata: Map::new(),
            similarity,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Typed view over the metadata map.
    pub fn record(&self) -> ProductRecord {
        ProductRecord::from_map(&self.metadata)
    }
}

/// Nearest-neighbor search over the products collection.
///
/// Returns up to `k` candidates ordered by similarity descending. Threshold
/// filtering is the adapter's concern, not the backend's.
#[async_trait]
pub trait SimilaritySearch: Send + Sync + 'static {
    async fn search(&self, vector: &[f32], k: usize) -> Result<Vec<Candidate>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_builder() {
        let candidate = Candidate::new("iPhone 14 Pro, màu Tím", 0.82)
            .with_metadata("name", "iPhone 14 Pro")
            .with_metadata("price", json!(22090000.0));

        assert_eq!(candidate.similarity, 0.82);
        let record = candidate.record();
        assert_eq!(record.name.as_deref(), Some("iPhone 14 Pro"));
        assert_eq!(record.price, Some(22090000.0));
    }
}
