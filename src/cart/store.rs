// src/cart/store.rs

use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::errors::{AppError, Result};
use crate::models::CartItem;

/// Persistence seam for the cart. Modeled as an explicit injectable object
/// (not ambient global state) so the engine stays unit-testable away from
/// real I/O.
#[async_trait]
pub trait CartStore: Send + Sync {
  async fn load(&self) -> Result<Vec<CartItem>>;
  async fn save(&self, items: &[CartItem]) -> Result<()>;
  async fn clear(&self) -> Result<()>;
}

/// Single-file JSON persistence — the local-storage analogue. The whole
/// item list is overwritten on every save and read once at startup.
pub struct FileCartStore {
  path: PathBuf,
}

impl FileCartStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

#[async_trait]
impl CartStore for FileCartStore {
  async fn load(&self) -> Result<Vec<CartItem>> {
    let raw = match tokio::fs::read_to_string(&self.path).await {
      Ok(raw) => raw,
      // A missing file is a first run, not a failure.
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => return Err(AppError::Store(e.to_string())),
    };
    let items: Vec<CartItem> = serde_json::from_str(&raw)?;
    Ok(items)
  }

  async fn save(&self, items: &[CartItem]) -> Result<()> {
    let payload = serde_json::to_string(items)?;
    tokio::fs::write(&self.path, payload)
      .await
      .map_err(|e| AppError::Store(e.to_string()))?;
    debug!(path = %self.path.display(), lines = items.len(), "Cart written through.");
    Ok(())
  }

  async fn clear(&self) -> Result<()> {
    match tokio::fs::remove_file(&self.path).await {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(AppError::Store(e.to_string())),
    }
  }
}

/// In-memory store used by tests and the demo binary.
#[derive(Default)]
pub struct MemoryCartStore {
  items: Mutex<Vec<CartItem>>,
}

impl MemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl CartStore for MemoryCartStore {
  async fn load(&self) -> Result<Vec<CartItem>> {
    Ok(self.items.lock().clone())
  }

  async fn save(&self, items: &[CartItem]) -> Result<()> {
    *self.items.lock() = items.to_vec();
    Ok(())
  }

  async fn clear(&self) -> Result<()> {
    self.items.lock().clear();
    Ok(())
  }
}
