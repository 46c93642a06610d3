//! HTTP clients for the retrieval pipeline's remote capabilities
//!
//! Thin `reqwest` adapters, one per capability:
//! - `OpenAiCompletion`: OpenAI-compatible `/chat/completions`
//! - `OllamaEmbedder`: Ollama-style `/api/embeddings`
//! - `HttpReranker`: text-embeddings-inference `/rerank`
//! - `SupabaseClient`: PostgREST RPCs `execute_sql` and `match_documents`
//!
//! Retries, pooling, and timeouts are transport concerns handled here (or by
//! reqwest); the pipeline above only sees the core traits.

pub mod completion;
pub mod embeddings;
pub mod reranker;
pub mod supabase;

pub use completion::OpenAiCompletion;
pub use embeddings::OllamaEmbedder;
pub use reranker::HttpReranker;
pub use supabase::SupabaseClient;

use thiserror::Error;

/// Client transport errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}
