// src/config.rs

use crate::error::{Result, VibError};
use crate::io::load_attribute_table;
use crate::model::AttributeTable;
use crate::physics::scene::ModeSelection;
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

// --- Enums ---

/// What to do when a sanity check (cell volume, radius sign, colour range) fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationPolicy {
  #[default]
  Off,
  Warn,
  Strict,
}

impl ValidationPolicy {
  /// Logs `problem` under `Warn`, returns it under `Strict`, ignores it under `Off`
  pub fn report(self, problem: VibError) -> Result<()> {
    match self {
      ValidationPolicy::Off => Ok(()),
      ValidationPolicy::Warn => {
        warn!("{}", problem);
        Ok(())
      }
      ValidationPolicy::Strict => Err(problem),
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
  #[serde(default)]
  pub selection: ModeSelection,

  /// JSON attribute table whose values clobber the built-in defaults
  #[serde(default)]
  pub user_table: Option<PathBuf>,

  /// Highest-priority attribute entries
  #[serde(default)]
  pub overrides: AttributeTable,

  #[serde(default)]
  pub lattice_validation: ValidationPolicy,

  #[serde(default)]
  pub attribute_validation: ValidationPolicy,
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/phononview/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    let (cfg, msg) = if path.exists() {
      match Self::from_file(&path) {
        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
        Err(e) => (Self::default(), format!("Error reading config: {}", e)),
      }
    } else {
      (Self::default(), "No config found. Using defaults.".to_string())
    };
    info!("{}", msg);
    (cfg, msg)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    let msg = match self.to_file(&path) {
      Ok(()) => format!("Config saved to {:?}", path),
      Err(e) => format!("Failed to save config: {}", e),
    };
    info!("{}", msg);
    msg
  }

  pub fn from_file(path: &Path) -> Result<Self> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
  }

  pub fn to_file(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, self)?;
    writer.flush()?;
    Ok(())
  }

  /// Reads the configured user table, if any, and applies the attribute policy
  /// to it and to the overrides.
  pub fn load_user_table(&self) -> Result<Option<AttributeTable>> {
    self.overrides.validate(self.attribute_validation)?;
    match &self.user_table {
      Some(path) => {
        let table = load_attribute_table(path)?;
        table.validate(self.attribute_validation)?;
        Ok(Some(table))
      }
      None => Ok(None),
    }
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "phononview", "phononview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
