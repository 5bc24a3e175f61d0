// src/services/checkout.rs

//! Checkout is not a transaction: it composes a preformatted order message,
//! builds a WhatsApp deep link for it, and clears the cart. Nothing is
//! awaited from the messaging side — the hand-off is fire-and-forget.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::cart::{require_non_empty, CartSession};
use crate::errors::Result;
use crate::models::{CartItem, Product};

pub const ORDER_REF_PREFIX: &str = "ORD-";

/// `ORD-` plus a uniform random 6-digit number.
pub fn order_reference() -> String {
  format!("{}{}", ORDER_REF_PREFIX, rand::rng().random_range(100_000..=999_999))
}

/// Unit prices render as raw decimals (no forced trailing zeros); line and
/// order totals always show two decimals.
fn display_price(amount: f64) -> String {
  format!("{}", amount)
}

/// One line per cart item: name, quantity, line total and unit price.
pub fn order_summary(items: &[CartItem]) -> String {
  items
    .iter()
    .map(|item| {
      format!(
        "*{}* x{} — ₹{:.2} (₹{}/{})",
        item.product.name,
        item.quantity,
        item.line_total(),
        display_price(item.product.price),
        item.product.unit,
      )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Full order message wrapped around the summary.
pub fn order_message(reference: &str, items: &[CartItem]) -> String {
  let total: f64 = items.iter().map(CartItem::line_total).sum();
  format!(
    "*New Order*\n\n*Order ID:* {}\n\n{}\n\n*Total: ₹{:.2}*\n\nPlease confirm my order.",
    reference,
    order_summary(items),
    total,
  )
}

/// Pre-filled inquiry message for a single product ("Contact to Buy").
pub fn inquiry_message(product: &Product) -> String {
  let mut message = format!(
    "Hello! I'm interested in:\n\n*{}*\nPrice: ₹{}/{}\n",
    product.name,
    display_price(product.price),
    product.unit,
  );
  if let Some(mrp) = product.mrp {
    message.push_str(&format!("MRP: ₹{}/{}\n", display_price(mrp), product.unit));
  }
  if let Some(dimension) = &product.dimension {
    message.push_str(&format!("Size: {}\n", dimension));
  }
  if let Some(description) = &product.description {
    message.push_str(&format!("Details: {}\n", description));
  }
  message.push_str("\nPlease share more info.");
  message
}

/// Deep link to the messaging service with the message percent-encoded
/// into the `text` parameter.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
  format!(
    "https://wa.me/{}?text={}",
    phone,
    utf8_percent_encode(message, NON_ALPHANUMERIC)
  )
}

/// What the caller hands to the UI after checkout.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
  pub reference: String,
  pub message: String,
  pub link: String,
}

/// Composes the order message for a non-empty cart, then clears the cart
/// unconditionally — once the message exists the order is assumed sent.
#[instrument(name = "checkout::checkout", skip(session, phone))]
pub async fn checkout(session: &mut CartSession, phone: &str) -> Result<CheckoutReceipt> {
  require_non_empty(session.cart())?;

  let reference = order_reference();
  let message = order_message(&reference, session.cart().items());
  let link = whatsapp_link(phone, &message);

  // The order is assumed sent once the message exists; a failure to drop
  // the persisted payload is surfaced as a notification, not a checkout
  // failure. The in-memory cart is cleared either way.
  if let Err(e) = session.clear().await {
    warn!(%reference, error = %e, "Persisted cart could not be cleared after checkout.");
  }
  info!(%reference, "Order composed and cart cleared.");

  Ok(CheckoutReceipt {
    reference,
    message,
    link,
  })
}
