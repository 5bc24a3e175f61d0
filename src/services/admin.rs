// src/services/admin.rs

//! Admin maintenance and write paths: input validation, document
//! construction for category/product submissions, the startup deny-list
//! cleanup and default-category seeding.

use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{format_name, Category, Product};
use crate::store::CatalogStore;

/// Categories created by earlier experiments that keep reappearing in the
/// store; deleted on startup.
pub const JUNK_CATEGORY_NAMES: &[&str] = &["Cars", "Tiles"];

/// Seeded when the store holds no categories at all.
pub const DEFAULT_CATEGORIES: &[&str] = &[
  "Floor Tiles",
  "Wall Tiles",
  "Vitrified Tiles",
  "Ceramic Tiles",
  "Marbles",
  "Granite",
];

/// Product form input, before validation and document construction.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
  pub name: String,
  pub price: f64,
  pub mrp: Option<f64>,
  pub unit: Option<String>,
  pub dimension: Option<String>,
  pub description: Option<String>,
  /// Already-normalized inline images, in upload order.
  pub images: Vec<String>,
}

impl ProductInput {
  /// Name and a positive price are required; everything else is optional.
  /// A failed validation blocks only this submission.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(AppError::Validation("Product name is required.".to_string()));
    }
    if self.price <= 0.0 {
      return Err(AppError::Validation("Product price must be positive.".to_string()));
    }
    Ok(())
  }

  /// Store document for this input. The legacy single-image field is kept
  /// in sync with the first image for older readers.
  fn to_document(&self) -> Value {
    json!({
      "name": self.name.trim(),
      "price": self.price,
      "mrp": self.mrp,
      "unit": self.unit.as_deref().map(str::trim).filter(|u| !u.is_empty()).unwrap_or("unit"),
      "dimension": self.dimension,
      "description": self.description,
      "imageUrls": if self.images.is_empty() { Value::Null } else { json!(self.images) },
      "imageUrl": self.images.first().cloned().unwrap_or_default(),
    })
  }
}

/// Creates a product under the given category after validating the input.
#[instrument(name = "admin::add_product", skip(store, input), fields(category_id = %category_id, name = %input.name))]
pub async fn add_product(store: &dyn CatalogStore, category_id: &str, input: &ProductInput) -> Result<Product> {
  input.validate()?;
  store.create_product(category_id, input.to_document()).await
}

/// Updates a product in place after validating the input.
#[instrument(name = "admin::update_product", skip(store, input), fields(category_id = %category_id, product_id = %product_id))]
pub async fn update_product(
  store: &dyn CatalogStore,
  category_id: &str,
  product_id: &str,
  input: &ProductInput,
) -> Result<()> {
  input.validate()?;
  store.update_product(category_id, product_id, input.to_document()).await
}

/// Creates a category. The name is optional; when present it is normalized
/// before it is written.
#[instrument(name = "admin::add_category", skip(store, image))]
pub async fn add_category(store: &dyn CatalogStore, name: Option<&str>, image: Option<String>) -> Result<Category> {
  let doc = json!({
    "name": name.map(str::trim).filter(|n| !n.is_empty()).map(format_name),
    "imageUrl": image.unwrap_or_default(),
  });
  store.create_category(doc).await
}

/// Deletes every category whose name matches the deny-list. Returns how
/// many documents were removed.
#[instrument(name = "admin::cleanup_junk", skip(store))]
pub async fn cleanup_junk(store: &dyn CatalogStore) -> Result<usize> {
  let mut removed = 0;
  for junk in JUNK_CATEGORY_NAMES {
    for category in store.categories_named(junk).await? {
      store.delete_category(&category.id).await?;
      removed += 1;
    }
  }
  if removed > 0 {
    warn!(removed, "Removed deny-listed categories.");
  }
  Ok(removed)
}

/// Seeds the default categories, but only into a completely empty store.
/// Returns whether seeding ran.
#[instrument(name = "admin::seed_defaults", skip(store))]
pub async fn seed_defaults(store: &dyn CatalogStore) -> Result<bool> {
  if !store.list_categories().await?.is_empty() {
    return Ok(false);
  }
  for name in DEFAULT_CATEGORIES {
    store
      .create_category(json!({ "name": name, "imageUrl": "" }))
      .await?;
  }
  info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories.");
  Ok(true)
}

/// Startup pass: drop junk, then seed if nothing is left.
pub async fn cleanup_and_seed(store: &dyn CatalogStore) -> Result<()> {
  cleanup_junk(store).await?;
  seed_defaults(store).await?;
  Ok(())
}
