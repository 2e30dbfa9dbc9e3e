// src/io/mod.rs

//! Attribute-table files. Structure and mode files come from an external
//! reader; only the radius/colour tables are read here.

use crate::error::Result;
use crate::model::AttributeTable;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Reads a JSON table in the `{"H": {"r": 0.31, "col": [r, g, b]}}` layout
pub fn load_attribute_table(path: &Path) -> Result<AttributeTable> {
  let reader = BufReader::new(File::open(path)?);
  let table: AttributeTable = serde_json::from_reader(reader)?;
  log::debug!("Loaded {} attribute entries from {:?}", table.len(), path);
  Ok(table)
}

pub fn save_attribute_table(path: &Path, table: &AttributeTable) -> Result<()> {
  let mut writer = BufWriter::new(File::create(path)?);
  serde_json::to_writer_pretty(&mut writer, table)?;
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::VibError;
  use crate::model::AtomAttributes;

  #[test]
  fn test_partial_entries() {
    let path = std::env::temp_dir()
      .join(format!("phononview-io-{}-partial.json", std::process::id()));
    std::fs::write(&path, r#"{"Na": {"col": [0.6, 0.3, 0.9]}, "Cl": {"r": 1.0}}"#).unwrap();
    let table = load_attribute_table(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(table.radius("Na"), None);
    assert_eq!(table.color("Na"), Some([0.6, 0.3, 0.9]));
    assert_eq!(table.radius("Cl"), Some(1.0));
    assert_eq!(table.color("Cl"), None);
  }

  #[test]
  fn test_save_then_load() {
    let path = std::env::temp_dir()
      .join(format!("phononview-io-{}-saved.json", std::process::id()));
    let mut table = AttributeTable::new();
    table.insert("Si", AtomAttributes::new(1.11, [0.94, 0.78, 0.63]));
    table.insert("O", AtomAttributes::radius_only(0.6));
    save_attribute_table(&path, &table).unwrap();
    let back = load_attribute_table(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back, table);
  }

  #[cfg(target_os = "linux")]
  #[test]
  fn test_save_reports_full_device() {
    let mut table = AttributeTable::new();
    table.insert("H", AtomAttributes::new(0.37, [1.0, 1.0, 1.0]));
    let res = save_attribute_table(Path::new("/dev/full"), &table);
    assert!(matches!(res, Err(VibError::Io(_))), "got {:?}", res);
  }

  #[test]
  fn test_missing_file() {
    let path = Path::new("/nonexistent/phononview/table.json");
    assert!(matches!(load_attribute_table(path), Err(VibError::Io(_))));
  }
}
