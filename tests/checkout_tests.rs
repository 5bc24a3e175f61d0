// tests/checkout_tests.rs
mod common; // Reference the common module

use common::*;
use std::sync::Arc;

use async_trait::async_trait;
use catalogue_app::cart::{CartSession, CartStore, MemoryCartStore};
use catalogue_app::errors::{AppError, Result};
use catalogue_app::models::{CartItem, Product};
use catalogue_app::services::checkout::{
  checkout, inquiry_message, order_message, order_reference, order_summary, whatsapp_link, ORDER_REF_PREFIX,
};
use serde_json::json;

#[test]
fn test_order_reference_is_prefix_plus_six_digits() {
  setup_tracing();
  for _ in 0..100 {
    let reference = order_reference();
    let digits = reference.strip_prefix(ORDER_REF_PREFIX).expect("ORD- prefix");
    assert_eq!(digits.len(), 6);
    let value: u32 = digits.parse().expect("numeric reference");
    assert!((100_000..=999_999).contains(&value));
  }
}

#[test]
fn test_order_summary_lines_carry_quantity_and_prices() {
  setup_tracing();
  let mut cart = catalogue_app::cart::Cart::new();
  cart.add(product("p1", "Glossy White", 100.0));
  cart.increase("p1");
  cart.add(product("p2", "Matte Grey", 99.5));

  let summary = order_summary(cart.items());
  let lines: Vec<&str> = summary.lines().collect();
  assert_eq!(lines.len(), 2);
  assert_eq!(lines[0], "*Glossy White* x2 — ₹200.00 (₹100/sq.ft)");
  assert_eq!(lines[1], "*Matte Grey* x1 — ₹99.50 (₹99.5/sq.ft)");
}

#[test]
fn test_order_message_wraps_summary_with_reference_and_total() {
  setup_tracing();
  let mut cart = catalogue_app::cart::Cart::new();
  cart.add(product("p1", "Glossy White", 100.0));
  cart.increase("p1");

  let message = order_message("ORD-123456", cart.items());
  assert!(message.starts_with("*New Order*\n\n*Order ID:* ORD-123456\n\n"));
  assert!(message.contains("*Glossy White* x2"));
  assert!(message.contains("*Total: ₹200.00*"));
  assert!(message.ends_with("Please confirm my order."));
}

#[test]
fn test_inquiry_message_includes_only_present_fields() {
  setup_tracing();
  let full = Product::from_document(
    "p1",
    &json!({
      "name": "Glossy White",
      "price": 85.0,
      "mrp": 110.0,
      "unit": "sq.ft",
      "dimension": "2x2 ft",
      "description": "Rectified tile.",
    }),
  );
  let message = inquiry_message(&full);
  assert!(message.contains("*Glossy White*"));
  assert!(message.contains("Price: ₹85/sq.ft"));
  assert!(message.contains("MRP: ₹110/sq.ft"));
  assert!(message.contains("Size: 2x2 ft"));
  assert!(message.contains("Details: Rectified tile."));
  assert!(message.ends_with("Please share more info."));

  let bare = Product::from_document("p2", &json!({ "name": "Plain", "price": 10.0 }));
  let message = inquiry_message(&bare);
  assert!(!message.contains("MRP:"));
  assert!(!message.contains("Size:"));
  assert!(!message.contains("Details:"));
}

#[test]
fn test_whatsapp_link_percent_encodes_message() {
  setup_tracing();
  let link = whatsapp_link("918210936795", "Hello! Total: ₹200.00");
  assert!(link.starts_with("https://wa.me/918210936795?text="));
  let query = link.split("?text=").nth(1).unwrap();
  // Nothing outside the alphanumeric set survives unencoded.
  assert!(query.chars().all(|c| c.is_ascii_alphanumeric() || c == '%'));
}

#[tokio::test]
async fn test_checkout_composes_message_and_clears_cart() {
  setup_tracing();
  let store = Arc::new(MemoryCartStore::new());
  let mut session = CartSession::restore(store.clone()).await;
  session.add(product("p1", "Glossy White", 100.0)).await.unwrap();
  session.increase("p1").await.unwrap();

  let receipt = checkout(&mut session, "918210936795").await.unwrap();

  assert!(receipt.reference.starts_with(ORDER_REF_PREFIX));
  assert!(receipt.message.contains("*Glossy White* x2"));
  assert!(receipt.link.starts_with("https://wa.me/918210936795?text="));

  // Fire-and-forget: the cart is gone both in memory and in the store.
  assert!(session.cart().is_empty());
  assert!(store.load().await.unwrap().is_empty());
}

/// Store whose persisted payload refuses to go away.
struct StuckCartStore {
  items: parking_lot::Mutex<Vec<CartItem>>,
}

#[async_trait]
impl CartStore for StuckCartStore {
  async fn load(&self) -> Result<Vec<CartItem>> {
    Ok(self.items.lock().clone())
  }

  async fn save(&self, items: &[CartItem]) -> Result<()> {
    *self.items.lock() = items.to_vec();
    Ok(())
  }

  async fn clear(&self) -> Result<()> {
    Err(AppError::Store("read-only filesystem".into()))
  }
}

#[tokio::test]
async fn test_checkout_returns_receipt_even_if_persisted_clear_fails() {
  setup_tracing();
  let store = Arc::new(StuckCartStore {
    items: parking_lot::Mutex::new(Vec::new()),
  });
  let mut session = CartSession::restore(store).await;
  session.add(product("p1", "Glossy White", 100.0)).await.unwrap();

  // The order is assumed sent once the message exists; a stuck persisted
  // payload must not fail the checkout.
  let receipt = checkout(&mut session, "918210936795").await.unwrap();
  assert!(receipt.message.contains("*Glossy White* x1"));
  assert!(session.cart().is_empty());
}

#[tokio::test]
async fn test_checkout_rejects_empty_cart() {
  setup_tracing();
  let store = Arc::new(MemoryCartStore::new());
  let mut session = CartSession::restore(store).await;

  let err = checkout(&mut session, "918210936795").await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}
