//! Backend endpoint settings
//!
//! One section per remote capability. API keys normally arrive through the
//! environment (`SHOP_AGENT_COMPLETION__API_KEY`, `SHOP_AGENT_SUPABASE__SERVICE_KEY`).

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_completion_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_completion_model")]
    pub model: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Sampling temperature; SQL generation wants determinism
    #[serde(default)]
    pub temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_completion_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_completion_model() -> String {
    "gpt-4.1-nano".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            endpoint: default_completion_endpoint(),
            model: default_completion_model(),
            api_key: None,
            temperature: 0.0,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Embedding endpoint (Ollama-style `/api/embeddings`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    #[serde(default = "default_embedding_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_embedding_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_embedding_endpoint() -> String {
    "http://localhost:11434".to_string()
}
fn default_embedding_model() -> String {
    "gte-multilingual-base".to_string()
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            endpoint: default_embedding_endpoint(),
            model: default_embedding_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cross-encoder rerank endpoint (text-embeddings-inference `/rerank`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankerSettings {
    #[serde(default = "default_reranker_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_reranker_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_reranker_endpoint() -> String {
    "http://localhost:8080".to_string()
}
fn default_reranker_model() -> String {
    "gte-multilingual-reranker-base".to_string()
}

impl Default for RerankerSettings {
    fn default() -> Self {
        Self {
            endpoint: default_reranker_endpoint(),
            model: default_reranker_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Supabase project used for both SQL execution and vector search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: String,

    /// Service-role key; required at runtime, empty by default so it can
    /// come from the environment
    #[serde(default)]
    pub service_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_defaults() {
        let settings = CompletionSettings::default();
        assert_eq!(settings.model, "gpt-4.1-nano");
        assert_eq!(settings.temperature, 0.0);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_supabase_defaults_empty() {
        let settings = SupabaseSettings::default();
        assert!(settings.url.is_empty());
        assert!(settings.service_key.is_empty());
    }
}
