//! Cross-encoder rerank endpoint client (text-embeddings-inference API)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use shop_agent_config::RerankerSettings;
use shop_agent_core::{Error, PairScorer, Result};

use crate::ClientError;

/// Client for a text-embeddings-inference style `/rerank` endpoint.
#[derive(Clone)]
pub struct HttpReranker {
    client: Client,
    config: RerankerSettings,
}

#[derive(Serialize)]
struct RerankRequest<'a> {
    query: &'a str,
    texts: &'a [String],
}

#[derive(Deserialize)]
struct RerankEntry {
    index: usize,
    score: f32,
}

impl HttpReranker {
    pub fn new(config: RerankerSettings) -> std::result::Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ClientError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn execute(
        &self,
        query: &str,
        texts: &[String],
    ) -> std::result::Result<Vec<f32>, ClientError> {
        let url = format!("{}/rerank", self.config.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&RerankRequest { query, texts })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(format!("{status}: {body}")));
        }

        let entries: Vec<RerankEntry> = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        scores_in_input_order(&entries, texts.len())
    }
}

/// The endpoint returns entries sorted by score; callers need scores aligned
/// to the input order.
fn scores_in_input_order(
    entries: &[RerankEntry],
    expected: usize,
) -> std::result::Result<Vec<f32>, ClientError> {
    let mut scores = vec![0.0f32; expected];
    let mut filled = 0usize;

    for entry in entries {
        if entry.index >= expected {
            return Err(ClientError::InvalidResponse(format!(
                "rerank index {} out of range for {} texts",
                entry.index, expected
            )));
        }
        scores[entry.index] = entry.score;
        filled += 1;
    }

    if filled != expected {
        return Err(ClientError::InvalidResponse(format!(
            "rerank returned {filled} scores for {expected} texts"
        )));
    }

    Ok(scores)
}

#[async_trait]
impl PairScorer for HttpReranker {
    async fn score(&self, query: &str, texts: &[String]) -> Result<Vec<f32>> {
        self.execute(query, texts)
            .await
            .map_err(|e| Error::Reranker(e.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
