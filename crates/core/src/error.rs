//! Error types shared across the workspace

use thiserror::Error;

/// Top-level error for the shop agent core
///
/// Each subsystem crate defines its own error enum and converts into one of
/// these variants at the crate boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Reranker error: {0}")]
    Reranker(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("SQL execution error: {0}")]
    Sql(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across all crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Sql("relation does not exist".to_string());
        assert_eq!(err.to_string(), "SQL execution error: relation does not exist");
    }
}
