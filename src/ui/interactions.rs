// src/ui/interactions.rs

use super::controller::InputEvent;
use super::session::{Session, Tick};
use crate::rendering::CairoCanvas;
use crate::utils::Point;
use gtk4::gdk;
use gtk4::glib;
use gtk4::{self as gtk, prelude::*};
use gtk4::{ApplicationWindow, GestureClick};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type SharedSession = Rc<RefCell<Session<CairoCanvas>>>;

/// Largest scale factor among connected monitors, so the back buffer is
/// sharp wherever the window ends up.
pub fn display_scale() -> i32 {
  let Some(display) = gdk::Display::default() else {
    return 1;
  };
  let monitors = display.monitors();
  (0..monitors.n_items())
    .filter_map(|i| monitors.item(i))
    .filter_map(|obj| obj.downcast::<gdk::Monitor>().ok())
    .map(|monitor| monitor.scale_factor())
    .max()
    .unwrap_or(1)
    .max(1)
}

/// Paints the controller's back buffer. After shutdown there is nothing
/// left to paint.
pub fn setup_drawing(drawing_area: &gtk::DrawingArea, session: SharedSession) {
  drawing_area.set_draw_func(move |_, cr, _w, _h| {
    let st = session.borrow();
    if let Some(canvas) = st.controller().surface() {
      if let Err(e) = canvas.paint_onto(cr) {
        log::warn!("Could not present frame: {}", e);
      }
    }
  });
}

pub fn setup_interactions(
  window: &ApplicationWindow,
  session: SharedSession,
  drawing_area: &gtk::DrawingArea,
  poll_interval: Duration,
) {
  // 1. CLICK -> queue
  let click = GestureClick::new();
  click.set_button(gdk::BUTTON_PRIMARY);

  let s = session.clone();
  click.connect_pressed(move |_, _n_press, x, y| {
    s.borrow_mut().push(InputEvent::PointerDown(Point::from_pointer(x, y)));
  });
  drawing_area.add_controller(click);

  // 2. POLL TICK (one event per interval)
  let s = session.clone();
  let da = drawing_area.clone();
  glib::timeout_add_local(poll_interval, move || {
    let tick = s.borrow_mut().tick();
    match tick {
      Tick::Closed => glib::ControlFlow::Break,
      Tick::Handled(outcome) => {
        if outcome.needs_redraw() {
          da.queue_draw();
        }
        glib::ControlFlow::Continue
      }
      Tick::Idle => glib::ControlFlow::Continue,
    }
  });

  // 3. WINDOW CLOSE
  let s = session;
  window.connect_close_request(move |_| {
    s.borrow_mut().shutdown();
    glib::Propagation::Proceed
  });
}
