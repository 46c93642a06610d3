//! Structured-path settings

use serde::{Deserialize, Serialize};

/// Settings for SQL generation and execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlSettings {
    /// Row cap injected into statements lacking an explicit LIMIT
    #[serde(default = "default_row_cap")]
    pub row_cap: usize,

    /// Table the generated statements are scoped to
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_row_cap() -> usize {
    3
}
fn default_table() -> String {
    "products".to_string()
}

impl Default for SqlSettings {
    fn default() -> Self {
        Self {
            row_cap: default_row_cap(),
            table: default_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SqlSettings::default();
        assert_eq!(settings.row_cap, 3);
        assert_eq!(settings.table, "products");
    }
}
