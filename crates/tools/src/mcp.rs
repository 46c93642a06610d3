//! Tool interface
//!
//! A minimal MCP-compatible surface: each tool carries a name, a
//! description, and a JSON Schema for its input, and executes against a JSON
//! value.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Tool description handed to the tool-calling LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool input
    pub parameters: Value,
}

/// Tool execution errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// A callable tool.
#[async_trait]
pub trait Tool: Send + Sync + 'static {
    fn schema(&self) -> ToolSchema;

    async fn execute(&self, input: Value) -> Result<Value, ToolError>;
}

/// Extract the required string field every lookup tool takes.
pub(crate) fn query_argument(input: &Value) -> Result<String, ToolError> {
    input
        .get("query")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ToolError::InvalidInput("missing string field 'query'".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_argument() {
        assert_eq!(
            query_argument(&json!({"query": "iPhone màu đen"})).unwrap(),
            "iPhone màu đen"
        );
        assert!(query_argument(&json!({})).is_err());
        assert!(query_argument(&json!({"query": 42})).is_err());
    }
}
