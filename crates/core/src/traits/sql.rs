//! Remote SQL execution trait

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Remote-procedure SQL execution scoped to the `products` table.
///
/// Rows come back as loosely-typed JSON objects; callers must treat keys
/// defensively (use-if-present).
#[async_trait]
pub trait SqlExecutor: Send + Sync + 'static {
    /// Execute one statement and return its rows.
    async fn execute(&self, statement: &str) -> Result<Vec<Value>>;
}
