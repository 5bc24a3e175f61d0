// src/carousel.rs

//! Wrap-around navigation over a product's display image sequence.

use crate::models::Product;

/// Image navigation state for the product dialog. Built fresh whenever a
/// product is selected, which resets the index to 0. The sequence is never
/// empty — a product with no usable images carries the placeholder.
#[derive(Debug, Clone)]
pub struct Carousel {
  images: Vec<String>,
  index: usize,
}

impl Carousel {
  pub fn for_product(product: &Product) -> Self {
    Self {
      images: product.display_images(),
      index: 0,
    }
  }

  /// Steps backward, wrapping from the first image to the last.
  pub fn prev(&mut self) -> &str {
    self.index = if self.index == 0 {
      self.images.len() - 1
    } else {
      self.index - 1
    };
    self.current()
  }

  /// Steps forward, wrapping from the last image to the first.
  pub fn next(&mut self) -> &str {
    self.index = if self.index == self.images.len() - 1 {
      0
    } else {
      self.index + 1
    };
    self.current()
  }

  pub fn current(&self) -> &str {
    &self.images[self.index]
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.images.len()
  }

  pub fn is_empty(&self) -> bool {
    self.images.is_empty()
  }

  /// "2 / 5" style counter for the dialog overlay.
  pub fn position_label(&self) -> String {
    format!("{} / {}", self.index + 1, self.images.len())
  }
}
