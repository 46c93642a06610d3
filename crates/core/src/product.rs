//! Product record shape and row coercion
//!
//! SQL execution and vector search both hand back loosely-typed JSON objects.
//! `ProductRecord::from_row` coerces those into the typed shape used by the
//! deduplication and formatting steps. Every field is optional: a SQL
//! projection only carries the columns the statement selected, and callers
//! must treat keys as use-if-present.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single product as presented to the agent layer.
///
/// `product_id` is the only reliable unique key. `name` is shared across
/// variants (same phone in several colors or storage tiers) and is the
/// grouping key for deduplication, not an identity key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category, e.g. "iPhone", "MacBook", "iPad"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Price in VND
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Stock status string ("instock", "onbackorder")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,

    /// RAM in gigabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,

    /// Storage in gigabytes, normalized from mixed-unit source values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<u64>,

    /// Long free-text description; stripped from duplicate variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-text rating/review; stripped from duplicate variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate: Option<String>,
}

impl ProductRecord {
    /// Coerce a loosely-typed JSON row into a typed record.
    ///
    /// Returns `None` for anything that is not a JSON object. Fields that are
    /// missing or have an unusable type are left as `None` rather than
    /// failing the whole row.
    pub fn from_row(row: &Value) -> Option<Self> {
        row.as_object().map(Self::from_map)
    }

    /// Coerce a JSON object map into a typed record.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            product_id: string_field(map, "product_id"),
            name: string_field(map, "name"),
            product_type: string_field(map, "type"),
            color: string_field(map, "color"),
            image: string_field(map, "image"),
            price: float_field(map, "price"),
            stock: string_field(map, "stock"),
            ram: integer_field(map, "ram").map(|v| v as u32),
            storage: map.get("storage").and_then(parse_storage_gb),
            description: string_field(map, "description"),
            evaluate: string_field(map, "evaluate"),
        }
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn float_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn integer_field(map: &Map<String, Value>, key: &str) -> Option<u64> {
    match map.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Normalize a storage value to gigabytes.
///
/// Source data mixes plain numbers (already GB) with suffixed strings like
/// `"512GB"` or `"1TB"`.
pub fn parse_storage_gb(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => {
            let s = s.trim().to_uppercase();
            if let Some(tb) = s.strip_suffix("TB") {
                let tb: f64 = tb.trim().parse().ok()?;
                Some((tb * 1024.0).round() as u64)
            } else if let Some(gb) = s.strip_suffix("GB") {
                let gb: f64 = gb.trim().parse().ok()?;
                Some(gb.round() as u64)
            } else {
                s.parse().ok()
            }
        }
        _ => None,
    }
}
