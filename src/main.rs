use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, DrawingArea};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub mod config;
pub mod model;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use config::Config;
use ui::interactions::{display_scale, setup_drawing, setup_interactions};

fn main() -> glib::ExitCode {
  let (config, config_msg) = Config::load();
  if let Err(e) = utils::logger::init(utils::logger::level_from_name(&config.log_level)) {
    eprintln!("Logger already installed: {}", e);
  }
  log::info!("{}", config_msg);

  let app = Application::builder()
    .application_id("org.elemental.insights")
    .build();

  let startup_failed = Rc::new(Cell::new(false));
  let failed = startup_failed.clone();
  app.connect_activate(move |app| build_ui(app, config.clone(), &failed));

  let code = app.run();
  if startup_failed.get() {
    glib::ExitCode::FAILURE
  } else {
    code
  }
}

fn build_ui(app: &Application, config: Config, failed: &Cell<bool>) {
  // Catalog, layout and back buffer must all be ready before any input.
  let session = match state::start_session(config.clone(), display_scale()) {
    Ok(session) => Rc::new(RefCell::new(session)),
    Err(e) => {
      log::error!("Startup failed: {}", e);
      failed.set(true);
      app.quit();
      return;
    }
  };

  let window = ApplicationWindow::builder()
    .application(app)
    .title(config.title.as_str())
    .default_width(config.window_width)
    .default_height(config.window_height)
    .resizable(false)
    .build();

  let drawing_area = DrawingArea::builder()
    .content_width(config.window_width)
    .content_height(config.window_height)
    .build();
  window.set_child(Some(&drawing_area));

  setup_drawing(&drawing_area, session.clone());
  setup_interactions(
    &window,
    session,
    &drawing_area,
    Duration::from_millis(config.poll_interval_ms),
  );

  window.present();
}
