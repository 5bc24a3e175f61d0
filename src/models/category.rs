// src/models/category.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{doc_created_at, doc_string, format_name};

/// Top-level grouping of products. The id is opaque and assigned by the
/// backing store; the name is genuinely optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
  pub id: String,
  pub name: Option<String>,
  /// Inline-encoded image (data URI), if one was uploaded.
  pub image: Option<String>,
  /// Only used for newest-first ordering.
  pub created_at: Option<DateTime<Utc>>,
}

impl Category {
  /// Parses a loose store document into a strict record. Blank names are
  /// folded to `None`; surviving names are normalized for display.
  pub fn from_document(id: &str, doc: &Value) -> Self {
    Self {
      id: id.to_string(),
      name: doc_string(doc, "name").map(|n| format_name(&n)),
      image: doc_string(doc, "imageUrl"),
      created_at: doc_created_at(doc),
    }
  }

  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or("Uncategorized")
  }
}
