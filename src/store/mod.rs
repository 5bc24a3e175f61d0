// src/store/mod.rs

//! Boundary to the external document store: category documents, each owning
//! a nested collection of product documents. The engine only ever sees this
//! trait; the hosted service's consistency behavior is opaque (last write
//! wins, no client-side merging).

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;

use crate::errors::Result;
use crate::models::{Category, Product};

/// Async seam over the document store. Loose documents go in; strict,
/// boundary-parsed records come out, already sorted newest-first.
///
/// Subscriptions follow the hosted store's model: a live channel per
/// collection that re-delivers the full matching set on every change.
#[async_trait]
pub trait CatalogStore: Send + Sync {
  async fn create_category(&self, doc: Value) -> Result<Category>;
  /// Merges the given top-level fields into the existing document.
  async fn update_category(&self, id: &str, doc: Value) -> Result<()>;
  /// Deletes the category and every product it owns.
  async fn delete_category(&self, id: &str) -> Result<()>;
  async fn list_categories(&self) -> Result<Vec<Category>>;
  /// One-shot equality query on the (normalized) category name.
  async fn categories_named(&self, name: &str) -> Result<Vec<Category>>;
  async fn subscribe_categories(&self) -> watch::Receiver<Vec<Category>>;

  async fn create_product(&self, category_id: &str, doc: Value) -> Result<Product>;
  async fn update_product(&self, category_id: &str, id: &str, doc: Value) -> Result<()>;
  async fn delete_product(&self, category_id: &str, id: &str) -> Result<()>;
  async fn list_products(&self, category_id: &str) -> Result<Vec<Product>>;
  async fn subscribe_products(&self, category_id: &str) -> Result<watch::Receiver<Vec<Product>>>;
}
