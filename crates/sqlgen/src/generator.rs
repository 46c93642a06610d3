//! SQL plan generation via LLM completion

use std::sync::Arc;

use shop_agent_core::Completion;

use crate::plan::QueryPlan;
use crate::prompt::render_sql_prompt;
use crate::SqlGenError;

/// Converts a free-text user query into a sanitized query plan.
pub struct SqlGenerator {
    llm: Arc<dyn Completion>,
}

impl SqlGenerator {
    pub fn new(llm: Arc<dyn Completion>) -> Self {
        Self { llm }
    }

    /// Generate a plan for a Vietnamese user query.
    ///
    /// A completion that parses to nothing yields an empty plan, not an
    /// error; only the transport itself can fail here.
    pub async fn generate(&self, user_query: &str) -> Result<QueryPlan, SqlGenError> {
        let prompt = render_sql_prompt(user_query);

        let raw = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| SqlGenError::Completion(e.to_string()))?;

        let plan = QueryPlan::parse(&raw);
        tracing::debug!(
            model = self.llm.model_name(),
            statements = plan.len(),
            "generated sql plan"
        );

        Ok(plan)
    }
}
