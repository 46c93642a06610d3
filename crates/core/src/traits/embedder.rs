//! Embedding provider trait

use async_trait::async_trait;

use crate::Result;

/// Maps text to a fixed-dimension numeric vector.
///
/// Implementations are stateless handles (load once, share via `Arc` across
/// concurrent lookups).
#[async_trait]
pub trait Embedder: Send + Sync + 'static {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Model name for logging.
    fn model_name(&self) -> &str;
}
