//! Query plan parsing and statement sanitization
//!
//! The completion output is an untrusted plan. Before anything executes it
//! is fence-stripped, split on statement terminators, reduced to SELECT
//! statements, row-capped, and wrapped so the execution endpoint returns a
//! uniform JSON row shape.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*```[A-Za-z]*\s*$").unwrap());

/// An ordered sequence of independent SQL statements.
///
/// Each statement is a full, executable SELECT; no invariant ties them
/// together. Results are unioned downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    statements: Vec<String>,
}

impl QueryPlan {
    /// Parse a raw completion into a plan.
    ///
    /// Malformed output degrades to an empty plan rather than an error; an
    /// empty plan is the caller's signal to fall back to semantic search.
    pub fn parse(raw: &str) -> Self {
        let cleaned = CODE_FENCE.replace_all(raw, "");

        let mut statements = Vec::new();
        for fragment in cleaned.split(';') {
            let statement = fragment.trim();
            if statement.is_empty() {
                continue;
            }
            if !is_select(statement) {
                tracing::warn!(
                    statement,
                    "discarding non-SELECT statement from generated plan"
                );
                continue;
            }
            statements.push(statement.to_string());
        }

        Self { statements }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

fn is_select(statement: &str) -> bool {
    statement
        .get(..6)
        .map(|prefix| prefix.eq_ignore_ascii_case("select"))
        .unwrap_or(false)
}

/// Append a row cap to a statement lacking an explicit limit clause.
pub fn inject_row_cap(statement: &str, cap: usize) -> String {
    if statement.to_lowercase().contains("limit") {
        statement.to_string()
    } else {
        format!("{statement} LIMIT {cap}")
    }
}

/// Wrap a statement so its result set materializes as JSON server-side,
/// making the transport row shape uniform regardless of the SELECT list.
pub fn wrap_as_json(statement: &str) -> String {
    format!("SELECT to_jsonb(t) FROM ({statement}) AS t;")
}
