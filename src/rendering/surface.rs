// src/rendering/surface.rs

use crate::config::Rgb;
use crate::utils::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
  /// Plain sans face for small labels.
  Small,
  /// Serif face for symbols, headings and the detail panel.
  Gothic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
  pub face: FontFace,
  pub size: f64,
}

impl Font {
  pub const fn new(face: FontFace, size: f64) -> Self {
    Self { face, size }
  }
}

/// The five drawing primitives the table needs. Text is anchored at its
/// top-left corner. Implementations never fail: a backend that can error
/// logs and carries on.
pub trait Surface {
  fn stroke_rect(&mut self, rect: Rect, color: Rgb, line_width: f64);
  fn fill_rect(&mut self, rect: Rect, color: Rgb);
  fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb);
  fn draw_text(&mut self, x: f64, y: f64, text: &str, font: Font, color: Rgb);
  /// Wipes everything to the background colour.
  fn clear(&mut self, background: Rgb);
}
