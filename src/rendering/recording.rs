// src/rendering/recording.rs
//
// Surface that remembers what was drawn since the last clear. Used by the
// tests to compare renders without rasterising.

use super::surface::{Font, Surface};
use crate::config::Rgb;
use crate::utils::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
  StrokeRect { rect: Rect, color: Rgb, line_width: f64 },
  FillRect { rect: Rect, color: Rgb },
  StrokeCircle { center: (f64, f64), radius: f64, color: Rgb },
  Text { x: f64, y: f64, text: String, font: Font, color: Rgb },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
  pub background: Option<Rgb>,
  pub ops: Vec<DrawOp>,
  pub clears: usize,
}

impl RecordingSurface {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn texts(&self) -> Vec<&str> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        DrawOp::Text { text, .. } => Some(text.as_str()),
        _ => None,
      })
      .collect()
  }

  pub fn circles(&self) -> Vec<f64> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        DrawOp::StrokeCircle { radius, .. } => Some(*radius),
        _ => None,
      })
      .collect()
  }
}

impl Surface for RecordingSurface {
  fn stroke_rect(&mut self, rect: Rect, color: Rgb, line_width: f64) {
    self.ops.push(DrawOp::StrokeRect { rect, color, line_width });
  }

  fn fill_rect(&mut self, rect: Rect, color: Rgb) {
    self.ops.push(DrawOp::FillRect { rect, color });
  }

  fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
    self.ops.push(DrawOp::StrokeCircle { center, radius, color });
  }

  fn draw_text(&mut self, x: f64, y: f64, text: &str, font: Font, color: Rgb) {
    self.ops.push(DrawOp::Text {
      x,
      y,
      text: text.to_string(),
      font,
      color,
    });
  }

  fn clear(&mut self, background: Rgb) {
    self.background = Some(background);
    self.ops.clear();
    self.clears += 1;
  }
}
