// src/services/mod.rs

//! Application services invoked from the UI layer: image normalization,
//! checkout message composition and the admin maintenance operations.

pub mod admin;
pub mod checkout;
pub mod image_normalizer;
