// src/config.rs

use crate::utils::{Point, Rect};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub type Rgb = (f64, f64, f64);

// --- TableStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
  pub background_color: Rgb,
  pub text_color: Rgb,
  pub tile_line_width: f64,
  pub modal_fill: Rgb,
  pub modal_border: Rgb,
  pub modal_text: Rgb,
  pub ring_color: Rgb,
}

impl Default for TableStyle {
  fn default() -> Self {
    Self {
      background_color: (0.0, 0.0, 0.0),
      text_color: (1.0, 1.0, 1.0),
      tile_line_width: 3.0,
      modal_fill: (1.0, 1.0, 1.0),
      modal_border: (0.0, 0.0, 0.0),
      modal_text: (0.0, 0.0, 0.0),
      ring_color: (0.25, 0.25, 0.25),
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub window_width: i32,
  pub window_height: i32,
  pub tile_size: i32,
  pub origin_x: i32,
  pub origin_y: i32,
  /// Idle wait between input checks of the event loop.
  pub poll_interval_ms: u64,
  pub title: String,
  pub log_level: String,
  pub style: TableStyle,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      window_width: 1400,
      window_height: 900,
      tile_size: 60,
      origin_x: 50,
      origin_y: 30,
      poll_interval_ms: 100,
      title: "Interactive Periodic Table of Elements".to_string(),
      log_level: "info".to_string(),
      style: TableStyle::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/elemental-insights/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  pub fn origin(&self) -> Point {
    Point::new(self.origin_x, self.origin_y)
  }

  pub fn window_bounds(&self) -> Rect {
    Rect::new(0, 0, self.window_width, self.window_height)
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "elemental", "elemental-insights") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_classic_window() {
    let cfg = Config::default();
    assert_eq!(cfg.window_bounds(), Rect::new(0, 0, 1400, 900));
    assert_eq!(cfg.origin(), Point::new(50, 30));
    assert_eq!(cfg.tile_size, 60);
    assert_eq!(cfg.poll_interval_ms, 100);
  }

  #[test]
  fn test_partial_file_keeps_defaults() {
    let cfg: Config = serde_json::from_str(r#"{ "tile_size": 48, "style": { "ring_color": [1.0, 0.0, 0.0] } }"#).unwrap();
    assert_eq!(cfg.tile_size, 48);
    assert_eq!(cfg.window_width, 1400);
    assert_eq!(cfg.style.ring_color, (1.0, 0.0, 0.0));
    assert_eq!(cfg.style.modal_fill, (1.0, 1.0, 1.0));
  }
}
