// src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use super::CatalogStore;
use crate::errors::{AppError, Result};
use crate::models::{by_created_at_desc, Category, Product};

/// In-memory stand-in for the hosted document store. Ids are assigned on
/// create, `createdAt` is stamped when the document does not carry one
/// (server-timestamp behavior), and every mutation pushes the full sorted
/// snapshot to the collection's subscribers.
pub struct MemoryStore {
  inner: RwLock<Inner>,
  categories_tx: watch::Sender<Vec<Category>>,
}

struct Inner {
  categories: Vec<CategoryRecord>,
}

struct CategoryRecord {
  id: String,
  doc: Value,
  products: Vec<ProductRecord>,
  products_tx: watch::Sender<Vec<Product>>,
}

struct ProductRecord {
  id: String,
  doc: Value,
}

impl MemoryStore {
  pub fn new() -> Self {
    let (categories_tx, _) = watch::channel(Vec::new());
    Self {
      inner: RwLock::new(Inner { categories: Vec::new() }),
      categories_tx,
    }
  }

  fn publish_categories(&self, inner: &Inner) {
    let snapshot = category_snapshot(inner);
    self.categories_tx.send_replace(snapshot);
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

fn stamp_created_at(doc: &mut Value) {
  if let Some(obj) = doc.as_object_mut() {
    if !obj.contains_key("createdAt") {
      obj.insert("createdAt".to_string(), Value::String(Utc::now().to_rfc3339()));
    }
  }
}

fn merge_fields(target: &mut Value, update: Value) {
  if let (Some(target_obj), Some(update_obj)) = (target.as_object_mut(), update.as_object()) {
    for (key, value) in update_obj {
      target_obj.insert(key.clone(), value.clone());
    }
  }
}

fn category_snapshot(inner: &Inner) -> Vec<Category> {
  let mut categories: Vec<Category> = inner
    .categories
    .iter()
    .map(|record| Category::from_document(&record.id, &record.doc))
    .collect();
  categories.sort_by(|a, b| by_created_at_desc(&a.created_at, &b.created_at));
  categories
}

fn product_snapshot(record: &CategoryRecord) -> Vec<Product> {
  let mut products: Vec<Product> = record
    .products
    .iter()
    .map(|p| Product::from_document(&p.id, &p.doc))
    .collect();
  products.sort_by(|a, b| by_created_at_desc(&a.created_at, &b.created_at));
  products
}

fn category_index(inner: &Inner, id: &str) -> Result<usize> {
  inner
    .categories
    .iter()
    .position(|record| record.id == id)
    .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found.", id)))
}

#[async_trait]
impl CatalogStore for MemoryStore {
  async fn create_category(&self, mut doc: Value) -> Result<Category> {
    stamp_created_at(&mut doc);
    let id = Uuid::new_v4().to_string();
    let category = Category::from_document(&id, &doc);

    let mut inner = self.inner.write();
    let (products_tx, _) = watch::channel(Vec::new());
    inner.categories.push(CategoryRecord {
      id,
      doc,
      products: Vec::new(),
      products_tx,
    });
    self.publish_categories(&inner);
    info!(category_id = %category.id, "Category created.");
    Ok(category)
  }

  async fn update_category(&self, id: &str, doc: Value) -> Result<()> {
    let mut inner = self.inner.write();
    let index = category_index(&inner, id)?;
    merge_fields(&mut inner.categories[index].doc, doc);
    self.publish_categories(&inner);
    debug!(category_id = %id, "Category updated.");
    Ok(())
  }

  async fn delete_category(&self, id: &str) -> Result<()> {
    let mut inner = self.inner.write();
    let index = category_index(&inner, id)?;
    // Dropping the record drops its product channel; subscribers observe
    // the channel closing.
    inner.categories.remove(index);
    self.publish_categories(&inner);
    info!(category_id = %id, "Category deleted with its products.");
    Ok(())
  }

  async fn list_categories(&self) -> Result<Vec<Category>> {
    Ok(category_snapshot(&self.inner.read()))
  }

  async fn categories_named(&self, name: &str) -> Result<Vec<Category>> {
    Ok(
      category_snapshot(&self.inner.read())
        .into_iter()
        .filter(|category| category.name.as_deref() == Some(name))
        .collect(),
    )
  }

  async fn subscribe_categories(&self) -> watch::Receiver<Vec<Category>> {
    self.categories_tx.subscribe()
  }

  async fn create_product(&self, category_id: &str, mut doc: Value) -> Result<Product> {
    stamp_created_at(&mut doc);
    let id = Uuid::new_v4().to_string();
    let product = Product::from_document(&id, &doc);

    let mut inner = self.inner.write();
    let index = category_index(&inner, category_id)?;
    let record = &mut inner.categories[index];
    record.products.push(ProductRecord { id, doc });
    let snapshot = product_snapshot(record);
    record.products_tx.send_replace(snapshot);
    info!(category_id = %category_id, product_id = %product.id, "Product created.");
    Ok(product)
  }

  async fn update_product(&self, category_id: &str, id: &str, doc: Value) -> Result<()> {
    let mut inner = self.inner.write();
    let index = category_index(&inner, category_id)?;
    let record = &mut inner.categories[index];
    let product = record
      .products
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found.", id)))?;
    merge_fields(&mut product.doc, doc);
    let snapshot = product_snapshot(record);
    record.products_tx.send_replace(snapshot);
    debug!(category_id = %category_id, product_id = %id, "Product updated.");
    Ok(())
  }

  async fn delete_product(&self, category_id: &str, id: &str) -> Result<()> {
    let mut inner = self.inner.write();
    let index = category_index(&inner, category_id)?;
    let record = &mut inner.categories[index];
    let before = record.products.len();
    record.products.retain(|p| p.id != id);
    if record.products.len() == before {
      return Err(AppError::NotFound(format!("Product '{}' not found.", id)));
    }
    let snapshot = product_snapshot(record);
    record.products_tx.send_replace(snapshot);
    info!(category_id = %category_id, product_id = %id, "Product deleted.");
    Ok(())
  }

  async fn list_products(&self, category_id: &str) -> Result<Vec<Product>> {
    let inner = self.inner.read();
    let index = category_index(&inner, category_id)?;
    Ok(product_snapshot(&inner.categories[index]))
  }

  async fn subscribe_products(&self, category_id: &str) -> Result<watch::Receiver<Vec<Product>>> {
    let inner = self.inner.read();
    let index = category_index(&inner, category_id)?;
    Ok(inner.categories[index].products_tx.subscribe())
  }
}
