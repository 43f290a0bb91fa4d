// src/rendering/scene.rs

use crate::config::Config;
use crate::model::{ElementCatalog, ElementRecord};
use crate::utils::{Point, Rect};
use std::rc::Rc;
use thiserror::Error;

/// Rows below period 1 where the lanthanide strip starts. Actinides sit one
/// row further down.
pub const F_BLOCK_ROW_OFFSET: i32 = 7;
/// First column of the lanthanide/actinide strips.
pub const F_BLOCK_FIRST_COLUMN: i32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
  #[error("no grid position is defined for atomic number {atomic_number}")]
  Unmapped { atomic_number: u32 },
  #[error("tile size must be positive, got {0}")]
  InvalidTileSize(i32),
  #[error(
    "tile for atomic number {} (column {}, row {}) falls outside the {:?} window",
    .atomic_number,
    .cell.column,
    .cell.row,
    .window
  )]
  OutOfBounds {
    atomic_number: u32,
    cell: GridCell,
    window: Rect,
  },
}

/// Column/row on the table, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
  pub column: i32,
  pub row: i32,
}

/// Geometry inputs for the layout. Changing any of these means
/// recomputing the placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
  pub origin: Point,
  pub tile_size: i32,
  pub window: Rect,
}

impl LayoutParams {
  pub fn from_config(cfg: &Config) -> Self {
    Self {
      origin: cfg.origin(),
      tile_size: cfg.tile_size,
      window: cfg.window_bounds(),
    }
  }
}

// This struct is used by the hit tester for picking
// and by painter.rs for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
  pub element: Rc<ElementRecord>,
  pub bounds: Rect,
}

/// Band rules: period rows 0..=6, s-block in columns 0-1, d-block in 2-11,
/// p-block in 12-17. f-block strips go below the main grid.
pub fn grid_cell(atomic_number: u32) -> Result<GridCell, LayoutError> {
  let z = atomic_number as i32;
  let (column, row) = match atomic_number {
    1 => (0, 0),
    2 => (17, 0),
    3..=4 => (z - 3, 1),
    5..=10 => (z - 5 + 12, 1),
    11..=12 => (z - 11, 2),
    13..=18 => (z - 13 + 12, 2),
    19..=36 => (z - 19, 3),
    37..=54 => (z - 37, 4),
    55..=56 => (z - 55, 5),
    57..=71 => (z - 57 + F_BLOCK_FIRST_COLUMN, F_BLOCK_ROW_OFFSET),
    72..=86 => (z - 72 + 3, 5),
    87..=88 => (z - 87, 6),
    89..=103 => (z - 89 + F_BLOCK_FIRST_COLUMN, F_BLOCK_ROW_OFFSET + 1),
    104..=118 => (z - 104 + 3, 6),
    _ => return Err(LayoutError::Unmapped { atomic_number }),
  };
  Ok(GridCell { column, row })
}

/// Pixel rectangle of `cell`, or `None` when any of its edges does not fit
/// in an `i32`.
pub fn tile_bounds(cell: GridCell, params: &LayoutParams) -> Option<Rect> {
  let size = params.tile_size;
  let x = cell.column.checked_mul(size)?.checked_add(params.origin.x)?;
  let y = cell.row.checked_mul(size)?.checked_add(params.origin.y)?;
  x.checked_add(size)?;
  y.checked_add(size)?;
  Some(Rect::new(x, y, size, size))
}

/// One placement per catalog entry, in catalog (ascending atomic number)
/// order. Fails on the first element that cannot be placed.
pub fn compute_placements(
  catalog: &ElementCatalog,
  params: &LayoutParams,
) -> Result<Vec<PlacedTile>, LayoutError> {
  if params.tile_size <= 0 {
    return Err(LayoutError::InvalidTileSize(params.tile_size));
  }

  let mut placements = Vec::with_capacity(catalog.len());
  for element in catalog.iter() {
    let cell = grid_cell(element.atomic_number)?;
    let bounds = tile_bounds(cell, params).filter(|b| params.window.encloses(b));
    let Some(bounds) = bounds else {
      return Err(LayoutError::OutOfBounds {
        atomic_number: element.atomic_number,
        cell,
        window: params.window,
      });
    };
    placements.push(PlacedTile {
      element: Rc::clone(element),
      bounds,
    });
  }

  log::debug!("Placed {} tiles at tile size {}", placements.len(), params.tile_size);
  Ok(placements)
}
