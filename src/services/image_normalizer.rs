// src/services/image_normalizer.rs

//! Bounds an uploaded image's pixel dimensions and re-encodes it as a JPEG
//! data URI that fits the inline-storage byte budget. Images are stored
//! inline in store documents, so the budget is what keeps documents small.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::future::join_all;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{GenericImageView, RgbImage};
use tracing::{debug, instrument, warn};

use crate::errors::{AppError, Result};

/// Larger pixel dimension is scaled down to this bound.
pub const MAX_DIMENSION: u32 = 1200;
/// Target decoded byte size for the final encoding.
pub const SIZE_BUDGET_BYTES: usize = 500 * 1024;
/// JPEG quality ladder: start high, step down, stop at the floor.
const QUALITY_START: u8 = 90;
const QUALITY_STEP: u8 = 10;
/// Quality at which an over-budget encoding is accepted anyway.
pub const QUALITY_FLOOR: u8 = 10;

/// Scales (w, h) proportionally so the larger dimension equals
/// [`MAX_DIMENSION`], rounding the other to the nearest pixel. Dimensions
/// already within the bound are returned unchanged — this never upscales.
pub fn bounded_dimensions(width: u32, height: u32) -> (u32, u32) {
  if width > height && width > MAX_DIMENSION {
    let scaled = (height as f64 * MAX_DIMENSION as f64 / width as f64).round() as u32;
    (MAX_DIMENSION, scaled)
  } else if height > MAX_DIMENSION {
    let scaled = (width as f64 * MAX_DIMENSION as f64 / height as f64).round() as u32;
    (scaled, MAX_DIMENSION)
  } else {
    (width, height)
  }
}

/// Decoded byte size estimated from the data-URI string length, accounting
/// for base64 expansion.
pub fn estimated_size(data_uri: &str) -> usize {
  data_uri.len() * 3 / 4
}

/// Normalizes one source image: decode, bound dimensions, then re-encode
/// the same raster at decreasing quality until the estimate drops below
/// [`SIZE_BUDGET_BYTES`] or the quality floor is reached. The floor case
/// accepts an over-budget result rather than failing.
#[instrument(name = "image_normalizer::normalize", skip(source), fields(source_len = source.len()))]
pub fn normalize(source: &[u8]) -> Result<String> {
  let decoded = image::load_from_memory(source).map_err(|e| AppError::ImageDecode(e.to_string()))?;
  let (width, height) = decoded.dimensions();
  let (target_w, target_h) = bounded_dimensions(width, height);

  // Rasterize once; the quality loop below re-encodes this same buffer.
  let raster: RgbImage = if (target_w, target_h) == (width, height) {
    decoded.to_rgb8()
  } else {
    decoded.resize_exact(target_w, target_h, FilterType::Lanczos3).to_rgb8()
  };

  let (data_uri, quality) = encode_to_budget(&raster, SIZE_BUDGET_BYTES)?;
  debug!(
    width = target_w,
    height = target_h,
    quality,
    estimated_bytes = estimated_size(&data_uri),
    "Image normalized."
  );
  Ok(data_uri)
}

/// Re-encodes the raster at decreasing quality until the estimate drops
/// below `budget` or the quality ladder hits [`QUALITY_FLOOR`]. Returns the
/// data URI together with the quality that produced it; the floor case
/// returns an over-budget encoding rather than an error. These are the only
/// two exit conditions.
pub fn encode_to_budget(raster: &RgbImage, budget: usize) -> Result<(String, u8)> {
  let mut quality = QUALITY_START;
  loop {
    let mut encoded = Vec::new();
    raster
      .write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, quality))
      .map_err(|e| AppError::ImageEncode(e.to_string()))?;
    let data_uri = format!("data:image/jpeg;base64,{}", STANDARD.encode(&encoded));

    if estimated_size(&data_uri) < budget || quality <= QUALITY_FLOOR {
      return Ok((data_uri, quality));
    }
    quality = quality.saturating_sub(QUALITY_STEP).max(QUALITY_FLOOR);
  }
}

/// Normalizes a batch of files concurrently. Individual failures are
/// logged and dropped from the result set; successes keep their original
/// relative order.
#[instrument(name = "image_normalizer::normalize_batch", skip(files), fields(count = files.len()))]
pub async fn normalize_batch(files: Vec<Vec<u8>>) -> Vec<String> {
  let tasks: Vec<_> = files
    .into_iter()
    .enumerate()
    .map(|(index, bytes)| tokio::task::spawn_blocking(move || (index, normalize(&bytes))))
    .collect();

  let mut normalized = Vec::new();
  for outcome in join_all(tasks).await {
    match outcome {
      Ok((_, Ok(data_uri))) => normalized.push(data_uri),
      Ok((index, Err(e))) => {
        warn!(index, error = %e, "Dropping image that failed to normalize.");
      }
      Err(e) => {
        warn!(error = %e, "Image normalization task failed.");
      }
    }
  }
  normalized
}
