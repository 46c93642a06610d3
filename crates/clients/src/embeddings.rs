//! Embedding endpoint client (Ollama-style API)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use shop_agent_config::EmbeddingSettings;
use shop_agent_core::{Embedder, Error, Result};

use crate::ClientError;

/// Client for an Ollama-style `/api/embeddings` endpoint.
#[derive(Clone)]
pub struct OllamaEmbedder {
    client: Client,
    config: EmbeddingSettings,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbedder {
    pub fn new(config: EmbeddingSettings) -> std::result::Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ClientError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn execute(&self, text: &str) -> std::result::Result<Vec<f32>, ClientError> {
        let url = format!(
            "{}/api/embeddings",
            self.config.endpoint.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .json(&EmbeddingRequest {
                model: &self.config.model,
                prompt: text,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(format!("{status}: {body}")));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if parsed.embedding.is_empty() {
            return Err(ClientError::InvalidResponse(
                "empty embedding vector".to_string(),
            ));
        }

        Ok(parsed.embedding)
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.execute(text)
            .await
            .map_err(|e| Error::Embedding(e.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"embedding": [0.1, -0.2, 0.3]}"#;
        let parsed: EmbeddingResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.embedding.len(), 3);
    }

    #[test]
    fn test_client_construction() {
        let embedder = OllamaEmbedder::new(EmbeddingSettings::default()).unwrap();
        assert_eq!(embedder.model_name(), "gte-multilingual-base");
    }
}
