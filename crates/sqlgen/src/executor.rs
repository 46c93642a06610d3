//! Sequential statement execution and result merging

use std::sync::Arc;

use serde_json::Value;

use shop_agent_core::SqlExecutor;

use crate::plan::{inject_row_cap, wrap_as_json, QueryPlan};

/// Batch execution configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Row cap injected into statements lacking an explicit LIMIT
    pub row_cap: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { row_cap: 3 }
    }
}

/// Merged outcome of a statement batch.
///
/// The orchestrator branches on the tag: `Rows` ends the structured path,
/// `Empty` and `Failed` both trigger semantic fallback. The split exists so
/// logs and tests can tell "ran fine, nothing matched" from "every statement
/// errored".
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// At least one statement produced rows; union across statements
    Rows(Vec<Value>),
    /// All statements ran (possibly with isolated failures) and no rows came back
    Empty,
    /// Every statement in the plan errored
    Failed(String),
}

/// Executes a plan statement by statement against the remote endpoint.
///
/// Statements run sequentially; they are independent reads, so ordering only
/// affects latency. A statement that errors contributes zero rows and never
/// aborts the rest of the batch.
pub struct BatchExecutor {
    executor: Arc<dyn SqlExecutor>,
    config: ExecutorConfig,
}

impl BatchExecutor {
    pub fn new(executor: Arc<dyn SqlExecutor>, config: ExecutorConfig) -> Self {
        Self { executor, config }
    }

    pub async fn execute_and_merge(&self, plan: &QueryPlan) -> BatchOutcome {
        if plan.is_empty() {
            return BatchOutcome::Empty;
        }

        let mut rows: Vec<Value> = Vec::new();
        let mut failures: Vec<String> = Vec::new();

        for statement in plan.statements() {
            let capped = inject_row_cap(statement, self.config.row_cap);
            let wrapped = wrap_as_json(&capped);

            match self.executor.execute(&wrapped).await {
                Ok(batch) => {
                    tracing::debug!(rows = batch.len(), "statement executed");
                    rows.extend(batch);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "statement failed, continuing batch");
                    failures.push(e.to_string());
                }
            }
        }

        if !rows.is_empty() {
            BatchOutcome::Rows(rows)
        } else if failures.len() == plan.len() {
            BatchOutcome::Failed(failures.join("; "))
        } else {
            BatchOutcome::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;
    use shop_agent_core::{Error, Result};

    /// Records executed statements; answers from a canned per-call script.
    struct ScriptedExecutor {
        executed: Mutex<Vec<String>>,
        script: Mutex<Vec<Result<Vec<Value>>>>,
    }

    impl ScriptedExecutor {
        fn new(script: Vec<Result<Vec<Value>>>) -> Self {
            Self {
                executed: Mutex::new(Vec::new()),
                script: Mutex::new(script),
            }
        }
    }

    #[async_trait]
    impl SqlExecutor for ScriptedExecutor {
        async fn execute(&self, statement: &str) -> Result<Vec<Value>> {
            self.executed.lock().push(statement.to_string());
            let mut script = self.script.lock();
            if script.is_empty() {
                Ok(Vec::new())
            } else {
                script.remove(0)
            }
        }
    }

    #[tokio::test]
    async fn test_row_cap_injected_and_wrapped() {
        let backend = Arc::new(ScriptedExecutor::new(vec![Ok(vec![])]));
        let executor = BatchExecutor::new(backend.clone(), ExecutorConfig::default());

        let plan = QueryPlan::parse("SELECT name FROM products;");
        let _ = executor.execute_and_merge(&plan).await;

        let executed = backend.executed.lock();
        assert_eq!(
            executed[0],
            "SELECT to_jsonb(t) FROM (SELECT name FROM products LIMIT 3) AS t;"
        );
    }

    #[tokio::test]
    async fn test_existing_limit_left_alone() {
        let backend = Arc::new(ScriptedExecutor::new(vec![Ok(vec![])]));
        let executor = BatchExecutor::new(backend.clone(), ExecutorConfig::default());

        let plan = QueryPlan::parse("SELECT name FROM products LIMIT 10;");
        let _ = executor.execute_and_merge(&plan).await;

        assert!(backend.executed.lock()[0].contains("LIMIT 10"));
        assert!(!backend.executed.lock()[0].contains("LIMIT 3"));
    }

    #[tokio::test]
    async fn test_union_across_statements() {
        let backend = Arc::new(ScriptedExecutor::new(vec![
            Ok(vec![json!({"name": "iPhone 12"})]),
            Ok(vec![json!({"name": "iPad Air"})]),
        ]));
        let executor = BatchExecutor::new(backend, ExecutorConfig::default());

        let plan = QueryPlan::parse(
            "SELECT name FROM products WHERE type ILIKE '%iphone%';\
             SELECT name FROM products WHERE type ILIKE '%ipad%';",
        );

        match executor.execute_and_merge(&plan).await {
            BatchOutcome::Rows(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_partial_failure_is_tolerated() {
        let backend = Arc::new(ScriptedExecutor::new(vec![
            Err(Error::Sql("syntax error".to_string())),
            Ok(vec![json!({"name": "MacBook Air"})]),
        ]));
        let executor = BatchExecutor::new(backend, ExecutorConfig::default());

        let plan = QueryPlan::parse(
            "SELECT bogus FROM products; SELECT name FROM products;",
        );

        match executor.execute_and_merge(&plan).await {
            BatchOutcome::Rows(rows) => assert_eq!(rows.len(), 1),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_all_statements_failing() {
        let backend = Arc::new(ScriptedExecutor::new(vec![
            Err(Error::Sql("boom".to_string())),
            Err(Error::Sql("boom".to_string())),
        ]));
        let executor = BatchExecutor::new(backend, ExecutorConfig::default());

        let plan = QueryPlan::parse(
            "SELECT a FROM products; SELECT b FROM products;",
        );

        assert!(matches!(
            executor.execute_and_merge(&plan).await,
            BatchOutcome::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_empty_plan_short_circuits() {
        let backend = Arc::new(ScriptedExecutor::new(vec![]));
        let executor = BatchExecutor::new(backend.clone(), ExecutorConfig::default());

        assert!(matches!(
            executor.execute_and_merge(&QueryPlan::empty()).await,
            BatchOutcome::Empty
        ));
        assert!(backend.executed.lock().is_empty());
    }

    #[tokio::test]
    async fn test_no_rows_is_empty() {
        let backend = Arc::new(ScriptedExecutor::new(vec![Ok(vec![])]));
        let executor = BatchExecutor::new(backend, ExecutorConfig::default());

        let plan = QueryPlan::parse("SELECT name FROM products WHERE ram = 99;");
        assert!(matches!(
            executor.execute_and_merge(&plan).await,
            BatchOutcome::Empty
        ));
    }
}
