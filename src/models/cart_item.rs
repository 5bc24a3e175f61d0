// src/models/cart_item.rs

use serde::{Deserialize, Serialize};

use super::Product;

/// One cart line: a denormalized product snapshot plus a quantity.
/// The snapshot is deliberately decoupled from live product edits.
/// Invariant: quantity >= 1 — the cart removes items instead of keeping
/// them at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
  #[serde(flatten)]
  pub product: Product,
  pub quantity: u32,
}

impl CartItem {
  pub fn new(product: Product) -> Self {
    Self { product, quantity: 1 }
  }

  pub fn line_total(&self) -> f64 {
    self.product.price * self.quantity as f64
  }
}
