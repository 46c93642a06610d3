//! Lookup response contract
//!
//! Both retrieval paths resolve to the same `{products, summary}` shape so
//! the agent layer can treat them interchangeably as tools. The summary is a
//! Vietnamese sentence; failures surface as a sentence too, never as an
//! error value.

use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// Result of a product lookup, semantic or structured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Matched products, deduplicated, verbose fields stripped from variants
    pub products: Vec<ProductRecord>,
    /// Vietnamese summary stating the result count (or the failure)
    pub summary: String,
}

impl LookupResponse {
    /// Build a response for a (possibly empty) product list.
    pub fn found(products: Vec<ProductRecord>) -> Self {
        let summary = messages::found(products.len());
        Self { products, summary }
    }

    /// Build a zero-product response carrying a system error sentence.
    pub fn failure(reason: &str) -> Self {
        Self {
            products: Vec::new(),
            summary: messages::system_error(reason),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// User-visible Vietnamese sentences.
pub mod messages {
    /// "Found N products based on your query."
    pub fn found(count: usize) -> String {
        format!("Tìm thấy {count} sản phẩm dựa trên truy vấn của bạn.")
    }

    /// "System error: ..."
    pub fn system_error(reason: &str) -> String {
        format!("Lỗi hệ thống: {reason}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_summary_counts() {
        let response = LookupResponse::found(vec![ProductRecord::default(); 2]);
        assert_eq!(response.products.len(), 2);
        assert!(response.summary.contains("2 sản phẩm"));
    }

    #[test]
    fn test_found_empty() {
        let response = LookupResponse::found(Vec::new());
        assert!(response.is_empty());
        assert!(response.summary.contains("0 sản phẩm"));
    }

    #[test]
    fn test_failure_has_no_products() {
        let response = LookupResponse::failure("backend unreachable");
        assert!(response.is_empty());
        assert!(response.summary.starts_with("Lỗi hệ thống:"));
        assert!(response.summary.contains("backend unreachable"));
    }

    #[test]
    fn test_serialized_shape() {
        let response = LookupResponse::found(Vec::new());
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("products").unwrap().is_array());
        assert!(value.get("summary").unwrap().is_string());
    }
}
