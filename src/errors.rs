// src/errors.rs

use thiserror::Error;

/// Application error taxonomy. Nothing here is fatal: every variant maps to
/// a user-visible notification and the engine keeps its last-known-good
/// in-memory state.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Image Decode Error: {0}")]
  ImageDecode(String),

  #[error("Image Encode Error: {0}")]
  ImageEncode(String),

  #[error("Store Error: {0}")]
  Store(String),

  #[error("Corrupted persisted state: {0}")]
  CorruptState(#[from] serde_json::Error),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in callers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
