// src/ui/session.rs
//
// Input queue in front of the controller. Events are kept in arrival order
// and each poll tick handles at most one of them.

use super::controller::{InputEvent, InteractionController, Outcome};
use crate::rendering::Surface;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
  /// Queue was empty.
  Idle,
  Handled(Outcome),
  /// Session is shut down; the poller should stop.
  Closed,
}

#[derive(Debug)]
pub struct Session<S: Surface> {
  controller: InteractionController<S>,
  pending: VecDeque<InputEvent>,
}

impl<S: Surface> Session<S> {
  pub fn new(controller: InteractionController<S>) -> Self {
    Self {
      controller,
      pending: VecDeque::new(),
    }
  }

  pub fn controller(&self) -> &InteractionController<S> {
    &self.controller
  }

  pub fn pending(&self) -> usize {
    self.pending.len()
  }

  pub fn is_closed(&self) -> bool {
    self.controller.view().is_closed()
  }

  pub fn push(&mut self, event: InputEvent) {
    if self.is_closed() {
      log::debug!("Dropping {:?}, session closed", event);
      return;
    }
    self.pending.push_back(event);
  }

  pub fn tick(&mut self) -> Tick {
    if self.is_closed() {
      return Tick::Closed;
    }
    match self.pending.pop_front() {
      Some(event) => Tick::Handled(self.controller.handle(event)),
      None => Tick::Idle,
    }
  }

  /// Window-close path: discard queued input, enter the terminal state and
  /// drop the surface.
  pub fn shutdown(&mut self) {
    let dropped = self.pending();
    self.pending.clear();
    if let Some(surface) = self.controller.shutdown() {
      drop(surface);
      log::info!("Drawing surface released ({} queued events discarded)", dropped);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;
  use crate::model::catalog::tests::hydrogen_helium;
  use crate::rendering::recording::RecordingSurface;
  use crate::state::{bootstrap, ViewState};
  use crate::utils::Point;

  fn session() -> Session<RecordingSurface> {
    bootstrap(Config::default(), &hydrogen_helium(), RecordingSurface::new()).unwrap()
  }

  fn click(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerDown(Point::new(x, y))
  }

  #[test]
  fn test_idle_tick() {
    let mut s = session();
    assert_eq!(s.tick(), Tick::Idle);
    assert_eq!(s.controller().view(), &ViewState::Grid);
  }

  #[test]
  fn test_one_event_per_tick_in_order() {
    let mut s = session();
    s.push(click(55, 35));
    s.push(click(700, 700));
    s.push(click(1100, 60));
    assert_eq!(s.pending(), 3);

    assert_eq!(s.tick(), Tick::Handled(Outcome::Opened(1)));
    assert_eq!(s.pending(), 2);
    assert_eq!(s.tick(), Tick::Handled(Outcome::Dismissed));
    assert_eq!(s.tick(), Tick::Handled(Outcome::Opened(2)));
    assert_eq!(s.tick(), Tick::Idle);
  }

  #[test]
  fn test_shutdown_discards_pending_and_stops_ticks() {
    let mut s = session();
    s.push(click(55, 35));
    s.push(click(55, 35));
    s.shutdown();

    assert_eq!(s.pending(), 0);
    assert!(s.is_closed());
    assert!(s.controller().surface().is_none());
    assert_eq!(s.tick(), Tick::Closed);

    s.push(click(55, 35));
    assert_eq!(s.pending(), 0);
    // Second close request is harmless
    s.shutdown();
    assert_eq!(s.tick(), Tick::Closed);
  }

  #[test]
  fn test_end_to_end_redraws_both_tiles() {
    let mut s = session();
    let initial = s.controller().surface().unwrap().ops.clone();

    s.push(click(55, 35));
    assert_eq!(s.tick(), Tick::Handled(Outcome::Opened(1)));
    assert_eq!(s.controller().view().selected().map(|e| e.symbol.as_str()), Some("H"));

    s.push(click(1300, 850));
    assert_eq!(s.tick(), Tick::Handled(Outcome::Dismissed));
    let surface = s.controller().surface().unwrap();
    assert_eq!(surface.ops, initial);
    let texts = surface.texts();
    assert!(texts.contains(&"H") && texts.contains(&"He"));
  }
}
