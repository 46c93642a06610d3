//! NL-to-SQL for the products table
//!
//! Features:
//! - Vietnamese prompt template with the fixed `products` schema and
//!   few-shot examples
//! - Plan sanitization: code-fence stripping, statement splitting,
//!   SELECT-only filtering, row-cap injection, JSON wrapping
//! - Sequential batch execution with per-statement error isolation and an
//!   explicit merged outcome

pub mod executor;
pub mod generator;
pub mod plan;
pub mod prompt;

pub use executor::{BatchExecutor, BatchOutcome, ExecutorConfig};
pub use generator::SqlGenerator;
pub use plan::{inject_row_cap, wrap_as_json, QueryPlan};
pub use prompt::render_sql_prompt;

use thiserror::Error;

/// SQL generation errors
#[derive(Error, Debug)]
pub enum SqlGenError {
    #[error("Completion error: {0}")]
    Completion(String),
}

impl From<SqlGenError> for shop_agent_core::Error {
    fn from(err: SqlGenError) -> Self {
        shop_agent_core::Error::Completion(err.to_string())
    }
}
