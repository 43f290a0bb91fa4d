// src/utils/geometry.rs

/// Integer screen coordinate, as delivered by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

impl Point {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// Converts a toolkit pointer position (sub-pixel) to screen pixels.
  pub fn from_pointer(x: f64, y: f64) -> Self {
    Self::new(x.floor() as i32, y.floor() as i32)
  }
}

/// Axis-aligned screen rectangle. `x + width` is the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
  pub x: i32,
  pub y: i32,
  pub width: i32,
  pub height: i32,
}

impl Rect {
  pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
    Self { x, y, width, height }
  }

  /// Saturates instead of wrapping for rectangles near the `i32` limits.
  pub fn right(&self) -> i32 {
    self.x.saturating_add(self.width)
  }

  pub fn bottom(&self) -> i32 {
    self.y.saturating_add(self.height)
  }

  /// Inclusive on all four edges, so a point on a shared border is
  /// inside both neighbours.
  pub fn contains(&self, p: Point) -> bool {
    p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
  }

  /// True when the interiors intersect. Touching edges do not count.
  pub fn overlaps(&self, other: &Rect) -> bool {
    self.x < other.right()
      && other.x < self.right()
      && self.y < other.bottom()
      && other.y < self.bottom()
  }

  /// True when `other` lies entirely within `self` (edges included).
  pub fn encloses(&self, other: &Rect) -> bool {
    other.x >= self.x
      && other.y >= self.y
      && other.right() <= self.right()
      && other.bottom() <= self.bottom()
  }

  #[cfg(test)]
  pub fn center(&self) -> (f64, f64) {
    (
      self.x as f64 + self.width as f64 / 2.0,
      self.y as f64 + self.height as f64 / 2.0,
    )
  }
}
