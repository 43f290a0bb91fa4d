// src/state.rs

use crate::config::Config;
use crate::model::{DataValidationError, ElementCatalog, ElementRecord};
use crate::rendering::{compute_placements, CairoCanvas, LayoutError, LayoutParams, Surface};
use crate::ui::controller::InteractionController;
use crate::ui::session::Session;
use std::rc::Rc;
use thiserror::Error;

/// What the window is showing. Owned by the interaction controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
  Grid,
  Detail(Rc<ElementRecord>),
  /// Window closed; the surface has been released.
  Closed,
}

impl ViewState {
  pub fn selected(&self) -> Option<&ElementRecord> {
    match self {
      ViewState::Detail(element) => Some(element),
      _ => None,
    }
  }

  pub fn is_closed(&self) -> bool {
    matches!(self, ViewState::Closed)
  }
}

/// Anything that stops the application before the event loop starts.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("element table rejected: {0}")]
  Catalog(#[from] DataValidationError),
  #[error("layout failed: {0}")]
  Layout(#[from] LayoutError),
  #[error("could not create drawing surface: {0}")]
  Surface(#[from] cairo::Error),
}

/// Lays out the catalog and hands the surface to a fresh controller, which
/// paints the initial grid.
pub fn bootstrap<S: Surface>(
  config: Config,
  catalog: &ElementCatalog,
  surface: S,
) -> Result<Session<S>, AppError> {
  if catalog.is_empty() {
    log::warn!("Element table is empty; the grid will have no tiles");
  }
  let placements = compute_placements(catalog, &LayoutParams::from_config(&config))?;
  log::info!("Laid out {} of 118 elements", placements.len());
  Ok(Session::new(InteractionController::new(surface, placements, config)))
}

/// Production startup: embedded table, off-screen cairo back buffer with
/// `scale` device pixels per logical pixel.
pub fn start_session(config: Config, scale: i32) -> Result<Session<CairoCanvas>, AppError> {
  let catalog = ElementCatalog::embedded()?;
  let canvas = CairoCanvas::new(config.window_width, config.window_height, scale)?;
  bootstrap(config, &catalog, canvas)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::recording::RecordingSurface;

  #[test]
  fn test_bootstrap_starts_in_grid() {
    let catalog = ElementCatalog::embedded().unwrap();
    let session = bootstrap(Config::default(), &catalog, RecordingSurface::new()).unwrap();
    assert_eq!(session.controller().view(), &ViewState::Grid);
    assert_eq!(session.controller().placements().len(), 71);
  }

  #[test]
  fn test_bootstrap_surfaces_layout_errors() {
    let catalog = ElementCatalog::embedded().unwrap();
    let cfg = Config {
      tile_size: 100,
      ..Config::default()
    };
    let err = bootstrap(cfg, &catalog, RecordingSurface::new()).unwrap_err();
    assert!(matches!(err, AppError::Layout(LayoutError::OutOfBounds { .. })));
  }

  #[test]
  fn test_start_session_uses_cairo_canvas() {
    let session = start_session(Config::default(), 1).unwrap();
    let canvas = session.controller().surface().unwrap();
    assert_eq!(canvas.pixel_size(), (1400, 900));

    let session = start_session(Config::default(), 2).unwrap();
    let canvas = session.controller().surface().unwrap();
    assert_eq!(canvas.pixel_size(), (2800, 1800));
  }

  #[test]
  fn test_start_session_reports_surface_failure() {
    let cfg = Config {
      window_width: -1,
      ..Config::default()
    };
    let err = start_session(cfg, 1).err().unwrap();
    assert!(matches!(err, AppError::Surface(_)));
    assert!(err.to_string().starts_with("could not create drawing surface"));

    let cfg = Config {
      window_width: i32::MAX,
      window_height: i32::MAX,
      ..Config::default()
    };
    assert!(matches!(start_session(cfg, 2), Err(AppError::Surface(_))));
  }

  #[test]
  fn test_selected_only_in_detail() {
    let catalog = ElementCatalog::embedded().unwrap();
    let he = Rc::clone(catalog.by_symbol("He").unwrap());
    assert_eq!(ViewState::Detail(he).selected().map(|e| e.atomic_number), Some(2));
    assert!(ViewState::Grid.selected().is_none());
    assert!(ViewState::Closed.is_closed());
  }
}
