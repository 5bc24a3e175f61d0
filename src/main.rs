// src/main.rs

use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use catalogue_app::cart::{CartSession, FileCartStore};
use catalogue_app::config::AppConfig;
use catalogue_app::errors::{AppError, Result};
use catalogue_app::services::{admin, checkout};
use catalogue_app::state::AppState;
use catalogue_app::store::{CatalogStore, MemoryStore};

/// Scripted walk through the engine: seed the catalogue, create a product,
/// fill the cart, and compose the checkout hand-off.
#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting catalogue engine demo...");

  let config = Arc::new(AppConfig::from_env()?);
  let catalog: Arc<dyn CatalogStore> = Arc::new(MemoryStore::new());
  let cart_store = Arc::new(FileCartStore::new(config.cart_store_path.clone()));

  let state = AppState {
    catalog: catalog.clone(),
    cart_store: cart_store.clone(),
    config: config.clone(),
  };

  if state.config.seed_defaults {
    admin::cleanup_and_seed(state.catalog.as_ref()).await?;
  }

  let mut categories = state.catalog.subscribe_categories().await;
  let first_category = categories
    .borrow_and_update()
    .first()
    .cloned()
    .ok_or_else(|| AppError::NotFound("No categories available after seeding.".to_string()))?;
  tracing::info!(
    category = %first_category.display_name(),
    "Active category selected."
  );

  let input = admin::ProductInput {
    name: "Glossy White 2x2".to_string(),
    price: 85.0,
    mrp: Some(110.0),
    unit: Some("sq.ft".to_string()),
    dimension: Some("2x2 ft".to_string()),
    description: Some("Rectified glossy vitrified tile.".to_string()),
    images: Vec::new(),
  };
  let product = admin::add_product(state.catalog.as_ref(), &first_category.id, &input).await?;

  let mut session = CartSession::restore(state.cart_store.clone()).await;
  session.add(product.clone()).await?;
  session.increase(&product.id).await?;
  tracing::info!(
    lines = session.cart().len(),
    total = session.cart().total(),
    "Cart ready for checkout."
  );

  let receipt = checkout::checkout(&mut session, &state.config.whatsapp_phone).await?;
  tracing::info!(reference = %receipt.reference, link = %receipt.link, "Order handed off.");

  Ok(())
}
