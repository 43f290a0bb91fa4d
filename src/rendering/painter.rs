// src/rendering/painter.rs

use super::scene::PlacedTile;
use super::surface::{Font, FontFace, Surface};
use crate::config::Config;
use crate::model::Category;
use crate::utils::Rect;

pub const FONT_LABEL: Font = Font::new(FontFace::Small, 11.0);
pub const FONT_SYMBOL: Font = Font::new(FontFace::Gothic, 18.0);
pub const FONT_TITLE: Font = Font::new(FontFace::Gothic, 26.0);

const TITLE_Y: f64 = 5.0;

// Legend block, anchored to the right edge of the window.
const LEGEND_RIGHT_INSET: i32 = 200;
const LEGEND_TOP: i32 = 100;
const LEGEND_SWATCH: i32 = 15;
const LEGEND_SPACING: i32 = 25;
const LEGEND_HEADER: &str = "Element Categories:";

/// Draws title, legend and every placed tile. Does not clear first, so
/// calling it twice on a cleared surface gives the same picture.
pub fn render_grid<S: Surface + ?Sized>(surface: &mut S, placements: &[PlacedTile], cfg: &Config) {
  draw_title(surface, cfg);
  draw_legend(surface, cfg);
  for tile in placements {
    draw_tile(surface, tile, cfg);
  }
}

pub fn draw_title<S: Surface + ?Sized>(surface: &mut S, cfg: &Config) {
  surface.draw_text(cfg.origin_x as f64, TITLE_Y, &cfg.title, FONT_TITLE, cfg.style.text_color);
}

pub fn draw_legend<S: Surface + ?Sized>(surface: &mut S, cfg: &Config) {
  let x = cfg.window_width.saturating_sub(LEGEND_RIGHT_INSET);
  let text = cfg.style.text_color;

  surface.draw_text(x as f64, (LEGEND_TOP - 30) as f64, LEGEND_HEADER, FONT_LABEL, text);

  for (i, category) in Category::ALL.iter().enumerate() {
    let y = LEGEND_TOP + i as i32 * LEGEND_SPACING;
    surface.fill_rect(Rect::new(x, y, LEGEND_SWATCH, LEGEND_SWATCH), category.color());
    surface.draw_text((x + LEGEND_SWATCH + 5) as f64, y as f64, category.label(), FONT_LABEL, text);
  }
}

/// Bordered tile: number top-left, symbol in the middle, block bottom-right.
pub fn draw_tile<S: Surface + ?Sized>(surface: &mut S, tile: &PlacedTile, cfg: &Config) {
  let b = tile.bounds;
  let size = b.width;
  let color = tile.element.category.color();

  surface.stroke_rect(b, color, cfg.style.tile_line_width);

  surface.draw_text(
    (b.x + 5) as f64,
    (b.y + 5) as f64,
    &tile.element.atomic_number.to_string(),
    FONT_LABEL,
    color,
  );
  surface.draw_text(
    (b.x + size / 4) as f64,
    (b.y + size / 3) as f64,
    &tile.element.symbol,
    FONT_SYMBOL,
    color,
  );
  surface.draw_text(
    (b.right() - 15) as f64,
    (b.bottom() - 15) as f64,
    tile.element.block.label(),
    FONT_LABEL,
    color,
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::catalog::tests::hydrogen_helium;
  use crate::rendering::recording::{DrawOp, RecordingSurface};
  use crate::rendering::scene::{compute_placements, LayoutParams};

  fn hh_placements(cfg: &Config) -> Vec<PlacedTile> {
    compute_placements(&hydrogen_helium(), &LayoutParams::from_config(cfg)).unwrap()
  }

  #[test]
  fn test_tile_draws_border_and_three_labels() {
    let cfg = Config::default();
    let placements = hh_placements(&cfg);
    let mut surface = RecordingSurface::new();
    draw_tile(&mut surface, &placements[0], &cfg);

    assert_eq!(surface.ops.len(), 4);
    assert_eq!(
      surface.ops[0],
      DrawOp::StrokeRect {
        rect: Rect::new(50, 30, 60, 60),
        color: Category::Nonmetal.color(),
        line_width: 3.0
      }
    );
    assert_eq!(surface.texts(), vec!["1", "H", "s"]);
    match &surface.ops[2] {
      DrawOp::Text { x, y, font, .. } => {
        assert_eq!((*x, *y), (65.0, 50.0));
        assert_eq!(*font, FONT_SYMBOL);
      }
      other => panic!("unexpected op {:?}", other),
    }
    match &surface.ops[3] {
      DrawOp::Text { x, y, .. } => assert_eq!((*x, *y), (95.0, 75.0)),
      other => panic!("unexpected op {:?}", other),
    }
  }

  #[test]
  fn test_legend_follows_category_order() {
    let cfg = Config::default();
    let mut surface = RecordingSurface::new();
    draw_legend(&mut surface, &cfg);

    let texts = surface.texts();
    assert_eq!(texts[0], LEGEND_HEADER);
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(&texts[1..], labels.as_slice());

    let swatches: Vec<Rect> = surface
      .ops
      .iter()
      .filter_map(|op| match op {
        DrawOp::FillRect { rect, .. } => Some(*rect),
        _ => None,
      })
      .collect();
    assert_eq!(swatches.len(), 9);
    assert_eq!(swatches[0], Rect::new(1200, 100, 15, 15));
    assert_eq!(swatches[8], Rect::new(1200, 300, 15, 15));
  }

  #[test]
  fn test_grid_render_is_idempotent() {
    let cfg = Config::default();
    let placements = hh_placements(&cfg);

    let mut once = RecordingSurface::new();
    render_grid(&mut once, &placements, &cfg);

    let mut twice = RecordingSurface::new();
    render_grid(&mut twice, &placements, &cfg);
    twice.clear(cfg.style.background_color);
    render_grid(&mut twice, &placements, &cfg);

    assert_eq!(once.ops, twice.ops);
    assert!(once.texts().contains(&"Interactive Periodic Table of Elements"));
  }

  #[test]
  fn test_unpopulated_slots_draw_nothing() {
    let cfg = Config::default();
    let placements = hh_placements(&cfg);
    let mut surface = RecordingSurface::new();
    render_grid(&mut surface, &placements, &cfg);

    let borders = surface
      .ops
      .iter()
      .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
      .count();
    assert_eq!(borders, 2);
  }
}
