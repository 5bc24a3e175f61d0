// src/cart/mod.rs

//! The cart engine: an ordered reducer over (product, quantity) lines, plus
//! a write-through session binding it to an injected [`CartStore`].
//!
//! The cart is client-local and ephemeral — it has no server-side
//! representation. Order is insertion order; it matters for display only.

pub mod store;

pub use store::{CartStore, FileCartStore, MemoryCartStore};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{CartItem, Product};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_items(items: Vec<CartItem>) -> Self {
    Self { items }
  }

  /// Adds one unit of `product`. An existing line for the same product id
  /// is incremented; a new line is appended otherwise, so a product id
  /// never appears twice.
  pub fn add(&mut self, product: Product) {
    match self.items.iter_mut().find(|i| i.product.id == product.id) {
      Some(item) => item.quantity += 1,
      None => self.items.push(CartItem::new(product)),
    }
  }

  /// Increments the matching line by one. No-op if the id is absent.
  pub fn increase(&mut self, product_id: &str) {
    if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
      item.quantity += 1;
    }
  }

  /// Decrements the matching line by one. A line that would drop below
  /// quantity 1 is removed entirely rather than retained at zero.
  pub fn decrease(&mut self, product_id: &str) {
    if let Some(pos) = self.items.iter().position(|i| i.product.id == product_id) {
      if self.items[pos].quantity <= 1 {
        self.items.remove(pos);
      } else {
        self.items[pos].quantity -= 1;
      }
    }
  }

  /// Removes the matching line unconditionally.
  pub fn remove(&mut self, product_id: &str) {
    self.items.retain(|i| i.product.id != product_id);
  }

  /// Sum of price x quantity over all lines. Never negative for valid
  /// (non-negative) prices, and recomputable from state alone.
  pub fn total(&self) -> f64 {
    self.items.iter().map(CartItem::line_total).sum()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }
}

/// Binds a [`Cart`] to a persistence backend. Every mutation writes the
/// whole item list through to the store; restore happens once at startup.
pub struct CartSession {
  cart: Cart,
  store: Arc<dyn CartStore>,
}

impl CartSession {
  /// Restores the persisted cart. A payload that cannot be read or parsed
  /// is treated as an empty cart, never as a fatal error.
  #[instrument(name = "cart::restore", skip(store))]
  pub async fn restore(store: Arc<dyn CartStore>) -> Self {
    let cart = match store.load().await {
      Ok(items) => {
        debug!(lines = items.len(), "Restored persisted cart.");
        Cart::from_items(items)
      }
      Err(e) => {
        warn!(error = %e, "Could not restore persisted cart; starting empty.");
        Cart::new()
      }
    };
    Self { cart, store }
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub async fn add(&mut self, product: Product) -> Result<()> {
    self.cart.add(product);
    self.persist().await
  }

  pub async fn increase(&mut self, product_id: &str) -> Result<()> {
    self.cart.increase(product_id);
    self.persist().await
  }

  pub async fn decrease(&mut self, product_id: &str) -> Result<()> {
    self.cart.decrease(product_id);
    self.persist().await
  }

  pub async fn remove(&mut self, product_id: &str) -> Result<()> {
    self.cart.remove(product_id);
    self.persist().await
  }

  /// Empties the cart and drops the persisted payload.
  pub async fn clear(&mut self) -> Result<()> {
    self.cart.clear();
    self.store.clear().await.map_err(|e| {
      warn!(error = %e, "Failed to clear persisted cart.");
      e
    })
  }

  async fn persist(&self) -> Result<()> {
    self.store.save(self.cart.items()).await.map_err(|e| {
      warn!(error = %e, "Failed to persist cart.");
      e
    })
  }
}

/// Guard for checkout and similar non-empty-only operations.
pub fn require_non_empty(cart: &Cart) -> Result<()> {
  if cart.is_empty() {
    info!("Cart operation rejected: cart is empty.");
    return Err(AppError::Validation("Cart is empty.".to_string()));
  }
  Ok(())
}
