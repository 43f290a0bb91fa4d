// src/ui/controller.rs
//
// Grid <-> Detail state machine. Owns the view state and the drawing
// surface; nothing else writes to either.

use super::hit_test;
use crate::config::Config;
use crate::rendering::{detail_panel, painter, PlacedTile, Surface};
use crate::state::ViewState;
use crate::utils::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
  PointerDown(Point),
}

/// Result of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// Nothing changed on screen.
  Ignored,
  /// Detail overlay drawn for this atomic number.
  Opened(u32),
  /// Overlay dismissed, grid repainted.
  Dismissed,
}

impl Outcome {
  pub fn needs_redraw(self) -> bool {
    !matches!(self, Outcome::Ignored)
  }
}

#[derive(Debug)]
pub struct InteractionController<S: Surface> {
  view: ViewState,
  placements: Vec<PlacedTile>,
  config: Config,
  surface: Option<S>,
}

impl<S: Surface> InteractionController<S> {
  /// Takes ownership of the surface and paints the initial grid.
  pub fn new(surface: S, placements: Vec<PlacedTile>, config: Config) -> Self {
    let mut controller = Self {
      view: ViewState::Grid,
      placements,
      config,
      surface: Some(surface),
    };
    controller.repaint_grid();
    controller
  }

  pub fn view(&self) -> &ViewState {
    &self.view
  }

  pub fn placements(&self) -> &[PlacedTile] {
    &self.placements
  }

  /// None once the controller has shut down.
  pub fn surface(&self) -> Option<&S> {
    self.surface.as_ref()
  }

  pub fn handle(&mut self, event: InputEvent) -> Outcome {
    match event {
      InputEvent::PointerDown(p) => self.pointer_down(p),
    }
  }

  pub fn pointer_down(&mut self, p: Point) -> Outcome {
    match &self.view {
      ViewState::Grid => {
        let Some(element) = hit_test::resolve(p, &self.placements).cloned() else {
          log::debug!("Click at ({}, {}) hit no element", p.x, p.y);
          return Outcome::Ignored;
        };

        if let Some(surface) = self.surface.as_mut() {
          detail_panel::render_detail(surface, &element, &self.config);
        }
        log::info!("Showing details for {} ({})", element.name, element.symbol);
        let z = element.atomic_number;
        self.view = ViewState::Detail(element);
        Outcome::Opened(z)
      }
      ViewState::Detail(element) => {
        log::info!("Closing details for {}", element.symbol);
        self.view = ViewState::Grid;
        self.repaint_grid();
        Outcome::Dismissed
      }
      ViewState::Closed => {
        log::warn!("Ignoring click at ({}, {}) after shutdown", p.x, p.y);
        Outcome::Ignored
      }
    }
  }

  /// Moves to the terminal state and hands back the surface so the caller
  /// decides when it is released. Later calls return None.
  pub fn shutdown(&mut self) -> Option<S> {
    if self.view.is_closed() {
      return None;
    }
    match self.view.selected() {
      Some(element) => log::info!("Shutting down with {} details open", element.name),
      None => log::info!("Shutting down from grid view"),
    }
    self.view = ViewState::Closed;
    self.surface.take()
  }

  fn repaint_grid(&mut self) {
    if let Some(surface) = self.surface.as_mut() {
      surface.clear(self.config.style.background_color);
      painter::render_grid(surface, &self.placements, &self.config);
    }
  }
}
