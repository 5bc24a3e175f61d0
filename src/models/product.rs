// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{doc_created_at, doc_string, PLACEHOLDER_IMAGE};

/// A product inside one owning category. Prices are the raw decimal amounts
/// the store documents carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  /// Original/list price, if the product is discounted.
  pub mrp: Option<f64>,
  pub unit: String,
  pub dimension: Option<String>,
  pub description: Option<String>,
  /// Ordered inline-encoded images. The legacy single-image field is folded
  /// in at parse time, so display code never sees it.
  pub images: Vec<String>,
  pub created_at: Option<DateTime<Utc>>,
}

impl Product {
  /// Parses a loose store document into a strict record, applying the
  /// defaulting rules once: absent name -> "Unnamed Product", absent price
  /// -> 0, absent/blank unit -> "unit", and the legacy `imageUrl` field
  /// becomes a one-element sequence when `imageUrls` is absent or empty.
  pub fn from_document(id: &str, doc: &Value) -> Self {
    let mut images: Vec<String> = doc
      .get("imageUrls")
      .and_then(Value::as_array)
      .map(|arr| arr.iter().filter_map(Value::as_str).map(str::to_string).collect())
      .unwrap_or_default();
    if images.is_empty() {
      if let Some(legacy) = doc_string(doc, "imageUrl") {
        images.push(legacy);
      }
    }

    Self {
      id: id.to_string(),
      name: doc_string(doc, "name").unwrap_or_else(|| "Unnamed Product".to_string()),
      price: doc.get("price").and_then(Value::as_f64).unwrap_or(0.0),
      mrp: doc.get("mrp").and_then(Value::as_f64),
      unit: doc_string(doc, "unit").unwrap_or_else(|| "unit".to_string()),
      dimension: doc_string(doc, "dimension"),
      description: doc_string(doc, "description"),
      images,
      created_at: doc_created_at(doc),
    }
  }

  /// The sequence the carousel walks: non-blank images, or a single
  /// placeholder when nothing usable exists. Never empty.
  pub fn display_images(&self) -> Vec<String> {
    let usable: Vec<String> = self
      .images
      .iter()
      .filter(|url| !url.trim().is_empty())
      .cloned()
      .collect();
    if usable.is_empty() {
      vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
      usable
    }
  }

  /// First usable image, for list/grid views.
  pub fn cover_image(&self) -> String {
    self
      .display_images()
      .into_iter()
      .next()
      .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
  }
}
