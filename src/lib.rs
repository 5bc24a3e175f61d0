// src/lib.rs

//! Headless engine for a small storefront catalogue: categories and
//! products live in an external document store and are observed through a
//! subscription boundary; uploaded images are normalized into inline data
//! URIs; the shopping cart is local, persisted per browser-equivalent, and
//! checks out by composing a WhatsApp deep link.

pub mod carousel;
pub mod cart;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use carousel::Carousel;
pub use cart::{Cart, CartSession, CartStore, FileCartStore, MemoryCartStore};
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use models::{CartItem, Category, Product};
pub use state::AppState;
pub use store::{CatalogStore, MemoryStore};
