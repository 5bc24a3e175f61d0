// src/state.rs

use crate::cart::CartStore;
use crate::config::AppConfig;
use crate::store::CatalogStore;
use std::sync::Arc;

/// Shared application state handed to whatever surface drives the engine.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<dyn CatalogStore>,
  pub cart_store: Arc<dyn CartStore>,
  pub config: Arc<AppConfig>,
}
