// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value};
use std::io::Cursor;
use tracing::Level;

use catalogue_app::models::Product;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---

/// Minimal valid product snapshot for cart tests.
pub fn product(id: &str, name: &str, price: f64) -> Product {
  Product::from_document(
    id,
    &json!({
      "name": name,
      "price": price,
      "unit": "sq.ft",
    }),
  )
}

/// Loose store document the way the admin surface writes products.
pub fn product_doc(name: &str, price: f64) -> Value {
  json!({
    "name": name,
    "price": price,
    "mrp": Value::Null,
    "unit": "unit",
    "imageUrls": Value::Null,
    "imageUrl": "",
  })
}

/// PNG-encoded gradient image, generated in memory.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
  let img = RgbImage::from_fn(width, height, |x, y| {
    Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
  });
  let mut bytes = Vec::new();
  DynamicImage::ImageRgb8(img)
    .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
    .expect("encode test png");
  bytes
}

/// Decodes a `data:image/jpeg;base64,` URI back into pixels.
pub fn decode_data_uri(uri: &str) -> DynamicImage {
  let payload = uri
    .strip_prefix("data:image/jpeg;base64,")
    .expect("jpeg data uri prefix");
  let bytes = STANDARD.decode(payload).expect("valid base64 payload");
  image::load_from_memory(&bytes).expect("decodable jpeg")
}
