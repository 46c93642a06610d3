//! Variant deduplication
//!
//! Multiple SKUs share a display name (same phone in several colors or
//! storage tiers). Repeating the long description and review text for each
//! variant bloats every response, so only the first occurrence of a name
//! keeps them. Records are never dropped: quantity and variant information
//! (color, storage, price) must survive as distinct line items.

use std::collections::HashSet;

use shop_agent_core::ProductRecord;

/// Strip verbose fields from repeated product names, preserving order and
/// length.
///
/// Idempotent: the fields are already absent on a second pass.
pub fn deduplicate(records: Vec<ProductRecord>) -> Vec<ProductRecord> {
    let mut seen: HashSet<Option<String>> = HashSet::new();

    records
        .into_iter()
        .map(|mut record| {
            if !seen.insert(record.name.clone()) {
                record.description = None;
                record.evaluate = None;
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, color: &str) -> ProductRecord {
        ProductRecord {
            name: Some(name.to_string()),
            color: Some(color.to_string()),
            description: Some("mô tả dài".to_string()),
            evaluate: Some("đánh giá".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_occurrence_keeps_verbose_fields() {
        let input = vec![
            record("iPhone 14 Pro", "Tím"),
            record("iPhone 14 Pro", "Đen"),
            record("iPhone 14 Pro", "Vàng"),
            record("MacBook Air M2", "Bạc"),
        ];

        let output = deduplicate(input);

        assert!(output[0].description.is_some());
        assert!(output[0].evaluate.is_some());
        for variant in &output[1..3] {
            assert!(variant.description.is_none());
            assert!(variant.evaluate.is_none());
        }
        // A different name keeps its fields
        assert!(output[3].description.is_some());
    }

    #[test]
    fn test_length_preserved() {
        let input = vec![
            record("iPhone 12", "Đen"),
            record("iPhone 12", "Trắng"),
        ];
        assert_eq!(deduplicate(input).len(), 2);
    }

    #[test]
    fn test_variant_attributes_survive() {
        let input = vec![
            record("iPhone 12", "Đen"),
            record("iPhone 12", "Trắng"),
        ];
        let output = deduplicate(input);
        assert_eq!(output[1].color.as_deref(), Some("Trắng"));
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            record("iPhone 12", "Đen"),
            record("iPhone 12", "Trắng"),
            record("iPad Air", "Xanh"),
        ];

        let once = deduplicate(input);
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nameless_records_group_together() {
        let nameless = ProductRecord {
            description: Some("mô tả".to_string()),
            evaluate: Some("đánh giá".to_string()),
            ..Default::default()
        };

        let output = deduplicate(vec![nameless.clone(), nameless]);
        assert!(output[0].description.is_some());
        assert!(output[1].description.is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
