// src/rendering/canvas.rs
//
// Off-screen back buffer. The interaction controller draws into it; the
// DrawingArea only copies it to the screen.

use super::surface::{Font, FontFace, Surface};
use crate::config::Rgb;
use crate::utils::Rect;
use cairo::{Context, Format, ImageSurface};
use std::f64::consts::PI;

pub struct CairoCanvas {
  image: ImageSurface,
  cr: Context,
}

impl CairoCanvas {
  /// `width` and `height` are in logical pixels. The buffer itself holds
  /// `scale` device pixels per logical pixel so HiDPI outputs stay sharp.
  pub fn new(width: i32, height: i32, scale: i32) -> Result<Self, cairo::Error> {
    let scale = scale.max(1);
    let (px_width, px_height) = width
      .checked_mul(scale)
      .zip(height.checked_mul(scale))
      .ok_or(cairo::Error::InvalidSize)?;
    let image = ImageSurface::create(Format::ARgb32, px_width, px_height)?;
    image.set_device_scale(scale as f64, scale as f64);
    let cr = Context::new(&image)?;
    log::debug!("Back buffer {}x{} px (scale {})", px_width, px_height, scale);
    Ok(Self { image, cr })
  }

  #[cfg(test)]
  pub fn pixel_size(&self) -> (i32, i32) {
    (self.image.width(), self.image.height())
  }

  /// Horizontal advance of `text` in `font`, in logical pixels.
  #[cfg(test)]
  pub fn text_advance(&self, text: &str, font: Font) -> Result<f64, cairo::Error> {
    self.set_font(font);
    Ok(self.cr.text_extents(text)?.x_advance())
  }

  /// Copies the back buffer onto a widget's context.
  pub fn paint_onto(&self, target: &Context) -> Result<(), cairo::Error> {
    self.image.flush();
    target.set_source_surface(&self.image, 0.0, 0.0)?;
    target.paint()
  }

  fn set_font(&self, font: Font) {
    let (family, weight) = match font.face {
      FontFace::Small => ("Sans", cairo::FontWeight::Normal),
      FontFace::Gothic => ("Serif", cairo::FontWeight::Bold),
    };
    self.cr.select_font_face(family, cairo::FontSlant::Normal, weight);
    self.cr.set_font_size(font.size);
  }
}

fn report(op: &str, result: Result<(), cairo::Error>) {
  if let Err(e) = result {
    log::warn!("cairo {} failed: {}", op, e);
  }
}

impl Surface for CairoCanvas {
  fn stroke_rect(&mut self, rect: Rect, color: Rgb, line_width: f64) {
    let (r, g, b) = color;
    self.cr.set_source_rgb(r, g, b);
    self.cr.set_line_width(line_width);
    self.cr.rectangle(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    report("stroke", self.cr.stroke());
  }

  fn fill_rect(&mut self, rect: Rect, color: Rgb) {
    let (r, g, b) = color;
    self.cr.set_source_rgb(r, g, b);
    self.cr.rectangle(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    report("fill", self.cr.fill());
  }

  fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
    let (r, g, b) = color;
    self.cr.set_source_rgb(r, g, b);
    self.cr.set_line_width(1.0);
    self.cr.new_sub_path();
    self.cr.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
    report("stroke", self.cr.stroke());
  }

  fn draw_text(&mut self, x: f64, y: f64, text: &str, font: Font, color: Rgb) {
    let (r, g, b) = color;
    self.cr.set_source_rgb(r, g, b);
    self.set_font(font);

    // Callers give the top-left corner; cairo wants the baseline.
    let ascent = match self.cr.font_extents() {
      Ok(ext) => ext.ascent(),
      Err(e) => {
        log::warn!("cairo font_extents failed: {}", e);
        font.size
      }
    };
    self.cr.move_to(x, y + ascent);
    report("show_text", self.cr.show_text(text));
  }

  fn clear(&mut self, background: Rgb) {
    let (r, g, b) = background;
    self.cr.set_source_rgb(r, g, b);
    report("paint", self.cr.paint());
  }
}
