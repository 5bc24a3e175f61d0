// src/models/mod.rs

//! Strict record types parsed once from the loose documents the catalog
//! store delivers. Defaulting rules (absent unit, legacy image fields,
//! display names) live here at the boundary, not in display code.

pub mod cart_item;
pub mod category;
pub mod product;

pub use cart_item::CartItem;
pub use category::Category;
pub use product::Product;

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;

/// Shown wherever a category or product has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Normalizes a raw name for display: trims, collapses inner whitespace and
/// title-cases each word ("  floor   TILES " -> "Floor Tiles").
pub fn format_name(raw: &str) -> String {
  raw
    .split_whitespace()
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

/// Newest-first ordering used by every collection view. Documents missing a
/// timestamp compare equal so the incoming (stable) order is preserved.
pub fn by_created_at_desc(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => b.cmp(a),
    _ => Ordering::Equal,
  }
}

/// Reads an optional string field, treating absent, null and blank values
/// as "not present".
pub(crate) fn doc_string(doc: &Value, field: &str) -> Option<String> {
  doc
    .get(field)
    .and_then(Value::as_str)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
}

/// Reads the `createdAt` field as an RFC 3339 timestamp, if present.
pub(crate) fn doc_created_at(doc: &Value) -> Option<DateTime<Utc>> {
  doc
    .get("createdAt")
    .and_then(Value::as_str)
    .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    .map(|dt| dt.with_timezone(&Utc))
}
