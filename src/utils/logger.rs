// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Installs a stderr logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

// Format: "🔴  [phononview::config] Error reading config: ..."
fn format_line(level: Level, target: &str, message: &str) -> String {
  format!("{}  [{}] {}", icon(level), target, message)
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let line = format_line(record.level(), record.target(), &record.args().to_string());
      let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
