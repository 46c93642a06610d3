//! Text completion trait

use async_trait::async_trait;

use crate::Result;

/// LLM text completion capability.
///
/// Used by the SQL generator; the conversational agent uses the same
/// capability outside this core.
#[async_trait]
pub trait Completion: Send + Sync + 'static {
    /// Complete a single prompt and return the raw text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model name for logging.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockCompletion;

    #[async_trait]
    impl Completion for MockCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok("SELECT product_id, name FROM products;".to_string())
        }

        fn model_name(&self) -> &str {
            "mock-completion"
        }
    }

    #[tokio::test]
    async fn test_mock_completion() {
        let llm = MockCompletion;
        assert_eq!(llm.model_name(), "mock-completion");

        let text = llm.complete("sinh SQL").await.unwrap();
        assert!(text.starts_with("SELECT"));
    }
}
