//! Supabase PostgREST client
//!
//! One client, two capabilities against the same project:
//! - `execute_sql` RPC for the structured path
//! - `match_documents` RPC for nearest-neighbor search over the `products`
//!   collection

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Map, Value};

use shop_agent_config::SupabaseSettings;
use shop_agent_core::{Candidate, Error, Result, SimilaritySearch, SqlExecutor};

use crate::ClientError;

/// PostgREST RPC client for a Supabase project.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    client: Client,
    config: SupabaseSettings,
}

impl SupabaseClient {
    pub fn new(config: SupabaseSettings) -> std::result::Result<Self, ClientError> {
        if config.url.is_empty() {
            return Err(ClientError::Configuration(
                "supabase.url is not set".to_string(),
            ));
        }
        if config.service_key.is_empty() {
            return Err(ClientError::Configuration(
                "supabase.service_key is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ClientError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn rpc_url(&self, function: &str) -> String {
        format!(
            "{}/rest/v1/rpc/{function}",
            self.config.url.trim_end_matches('/')
        )
    }

    async fn rpc(&self, function: &str, body: Value) -> std::result::Result<Value, ClientError> {
        tracing::debug!(function, "postgrest rpc call");

        let response = self
            .client
            .post(self.rpc_url(function))
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(format!("{function}: {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Convert one `match_documents` row into a candidate.
///
/// Rows are trusted only structurally: a missing field degrades that field,
/// not the whole row.
fn candidate_from_row(row: &Value) -> Candidate {
    let content = row
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let metadata = row
        .get("metadata")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(Map::new);

    let similarity = row
        .get("similarity")
        .and_then(Value::as_f64)
        .unwrap_or(0.0) as f32;

    Candidate {
        content,
        metadata,
        similarity,
    }
}

#[async_trait]
impl SqlExecutor for SupabaseClient {
    async fn execute(&self, statement: &str) -> Result<Vec<Value>> {
        let data = self
            .rpc("execute_sql", json!({ "sql": statement }))
            .await
            .map_err(|e| Error::Sql(e.to_string()))?;

        match data {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            other => Err(Error::Sql(format!(
                "unexpected execute_sql payload: {other}"
            ))),
        }
    }
}

#[async_trait]
impl SimilaritySearch for SupabaseClient {
    async fn search(&self, vector: &[f32], k: usize) -> Result<Vec<Candidate>> {
        let data = self
            .rpc(
                "match_documents",
                json!({
                    "query_embedding": vector,
                    "match_count": k,
                }),
            )
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        let rows = match data {
            Value::Array(rows) => rows,
            Value::Null => Vec::new(),
            other => {
                return Err(Error::VectorStore(format!(
                    "unexpected match_documents payload: {other}"
                )))
            }
        };

        Ok(rows.iter().map(candidate_from_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SupabaseSettings {
        SupabaseSettings {
            url: "https://example.supabase.co".to_string(),
            service_key: "service-key".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_rpc_url() {
        let client = SupabaseClient::new(test_config()).unwrap();
        assert_eq!(
            client.rpc_url("execute_sql"),
            "https://example.supabase.co/rest/v1/rpc/execute_sql"
        );
    }

    #[test]
    fn test_missing_url_rejected() {
        let err = SupabaseClient::new(SupabaseSettings::default()).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn test_candidate_from_row() {
        let row = json!({
            "content": "iPhone 14 Pro màu Tím",
            "metadata": {"name": "iPhone 14 Pro", "color": "Tím"},
            "similarity": 0.87
        });

        let candidate = candidate_from_row(&row);
        assert_eq!(candidate.content, "iPhone 14 Pro màu Tím");
        assert!((candidate.similarity - 0.87).abs() < 1e-6);
        assert_eq!(
            candidate.record().name.as_deref(),
            Some("iPhone 14 Pro")
        );
    }

    #[test]
    fn test_candidate_from_degenerate_row() {
        let candidate = candidate_from_row(&json!({}));
        assert!(candidate.content.is_empty());
        assert!(candidate.metadata.is_empty());
        assert_eq!(candidate.similarity, 0.0);
    }
}
