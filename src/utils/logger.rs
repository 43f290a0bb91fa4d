// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::str::FromStr;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Parses a level name from the config file. Unknown names fall back to Info.
pub fn level_from_name(name: &str) -> LevelFilter {
  LevelFilter::from_str(name.trim()).unwrap_or(LevelFilter::Info)
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn icon_for(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "🔴  Catalog rejected: duplicate symbol"
      let mut err = std::io::stderr().lock();
      let _ = writeln!(err, "{}  {}", icon_for(record.level()), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
