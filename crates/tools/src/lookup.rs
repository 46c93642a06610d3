//! Product lookup tools
//!
//! `get_product_semantic` for need-based questions ("điện thoại nào chụp ảnh
//! đẹp?"), `query_products` for spec-filtered requests ("iPhone RAM 8GB giá
//! dưới 10 triệu"). The agent picks; both return the same shape and neither
//! ever fails the call with a retrieval error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use shop_agent_retrieval::ProductLookup;

use crate::mcp::{query_argument, Tool, ToolError, ToolSchema};
use crate::registry::ToolRegistry;

fn query_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Câu truy vấn của khách hàng bằng tiếng Việt"
            }
        },
        "required": ["query"]
    })
}

/// Semantic search over product descriptions.
pub struct SemanticLookupTool {
    lookup: Arc<ProductLookup>,
}

impl SemanticLookupTool {
    pub fn new(lookup: Arc<ProductLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl Tool for SemanticLookupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_product_semantic".to_string(),
            description: "Find products by described need or feature \
                          (use for questions without concrete specs)"
                .to_string(),
            parameters: query_parameters(),
        }
    }

    async fn execute(&self, input: Value) -> Result<Value, ToolError> {
        let query = query_argument(&input)?;
        let response = self.lookup.semantic_lookup(&query).await;
        serde_json::to_value(response).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
    }
}

/// Structured search with SQL generation and semantic fallback.
pub struct StructuredLookupTool {
    lookup: Arc<ProductLookup>,
}

impl StructuredLookupTool {
    pub fn new(lookup: Arc<ProductLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl Tool for StructuredLookupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "query_products".to_string(),
            description: "Find products by concrete specs such as RAM, \
                          storage, price, color, or stock status"
                .to_string(),
            parameters: query_parameters(),
        }
    }

    async fn execute(&self, input: Value) -> Result<Value, ToolError> {
        let query = query_argument(&input)?;
        let response = self.lookup.structured_lookup(&query).await;
        serde_json::to_value(response).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
    }
}

/// Registry with both lookup tools registered.
pub fn create_default_registry(lookup: Arc<ProductLookup>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SemanticLookupTool::new(Arc::clone(&lookup))));
    registry.register(Arc::new(StructuredLookupTool::new(lookup)));
    registry
}
