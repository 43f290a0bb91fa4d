// src/rendering/detail_panel.rs

use super::surface::{Font, FontFace, Surface};
use crate::config::Config;
use crate::model::ElementRecord;
use crate::utils::Rect;

pub const PANEL_WIDTH: i32 = 500;
pub const PANEL_HEIGHT: i32 = 400;
/// Radius step between neighbouring rings.
pub const RING_SPACING: f64 = 12.0;
/// Left edge of the fact lines, relative to the panel. Sits just past the
/// seventh ring.
pub const TEXT_COLUMN: i32 = 220;

const FONT_HEADING: Font = Font::new(FontFace::Gothic, 15.0);
const FONT_BODY: Font = Font::new(FontFace::Gothic, 13.0);

pub const DISMISS_HINT: &str = "Click anywhere to close";

/// Coarse ring count for the decorative shell diagram. Not a real
/// electron-shell model.
pub fn shell_count(atomic_number: u32) -> u32 {
  match atomic_number {
    0..=2 => 1,
    3..=10 => 2,
    11..=18 => 3,
    19..=36 => 4,
    37..=54 => 5,
    55..=86 => 6,
    _ => 7,
  }
}

/// Modal rectangle centred in the window.
pub fn panel_bounds(cfg: &Config) -> Rect {
  Rect::new(
    cfg.window_width.saturating_sub(PANEL_WIDTH) / 2,
    cfg.window_height.saturating_sub(PANEL_HEIGHT) / 2,
    PANEL_WIDTH,
    PANEL_HEIGHT,
  )
}

/// Text lines shown next to the ring diagram, top to bottom.
pub fn detail_lines(element: &ElementRecord) -> [String; 5] {
  [
    format!("Element: {} ({})", element.name, element.symbol),
    format!("Atomic Number: {}", element.atomic_number),
    format!("Atomic Weight: {:.3}", element.atomic_weight),
    format!("Block: {}", element.block.label()),
    format!("Electron Config: {}", element.electron_configuration),
  ]
}

/// A line of modal text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelText {
  pub x: f64,
  pub y: f64,
  pub text: String,
  pub font: Font,
}

fn ring_center(panel: Rect) -> (f64, f64) {
  (
    panel.x as f64 + panel.width as f64 / 4.0,
    panel.y as f64 + panel.height as f64 / 2.0,
  )
}

/// Fact lines top to bottom, then the dismiss hint along the bottom.
pub fn text_layout(element: &ElementRecord, cfg: &Config) -> Vec<PanelText> {
  let panel = panel_bounds(cfg);
  let text_x = (panel.x + TEXT_COLUMN) as f64;

  let mut out: Vec<PanelText> = detail_lines(element)
    .into_iter()
    .enumerate()
    .map(|(i, text)| PanelText {
      x: text_x,
      y: (panel.y + 40 + i as i32 * 40) as f64,
      text,
      font: if i == 4 { FONT_BODY } else { FONT_HEADING },
    })
    .collect();
  out.push(PanelText {
    x: (panel.x + 20) as f64,
    y: (panel.bottom() - 40) as f64,
    text: DISMISS_HINT.to_string(),
    font: FONT_HEADING,
  });
  out
}

/// Paints the modal over whatever is on the surface. Only the panel area
/// is touched.
pub fn render_detail<S: Surface + ?Sized>(surface: &mut S, element: &ElementRecord, cfg: &Config) {
  let style = &cfg.style;
  let panel = panel_bounds(cfg);

  surface.fill_rect(panel, style.modal_fill);
  surface.stroke_rect(panel, style.modal_border, 1.0);

  let center = ring_center(panel);
  for ring in 1..=shell_count(element.atomic_number) {
    surface.stroke_circle(center, ring as f64 * RING_SPACING, style.ring_color);
  }

  for line in text_layout(element, cfg) {
    surface.draw_text(line.x, line.y, &line.text, line.font, style.modal_text);
  }
}
