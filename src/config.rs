// src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  /// Phone number the outbound WhatsApp deep links address.
  pub whatsapp_phone: String,
  /// Path the serialized cart is written to (local-storage analogue).
  pub cart_store_path: PathBuf,
  /// Run the deny-list cleanup and default-category seeding on startup.
  pub seed_defaults: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let whatsapp_phone = env::var("WHATSAPP_PHONE").unwrap_or_else(|_| "918210936795".to_string());
    if whatsapp_phone.trim().is_empty() || !whatsapp_phone.chars().all(|c| c.is_ascii_digit()) {
      return Err(AppError::Config(format!(
        "Invalid WHATSAPP_PHONE '{}': expected digits only",
        whatsapp_phone
      )));
    }

    let cart_store_path = env::var("CART_STORE_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from("catalogue_cart.json"));

    let seed_defaults = env::var("SEED_DEFAULTS")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DEFAULTS value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      whatsapp_phone,
      cart_store_path,
      seed_defaults,
    })
  }
}
