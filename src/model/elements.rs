// src/model/elements.rs

use super::attributes::{AtomAttributes, AttributeTable};
use std::sync::OnceLock;

// Global defaults (built once on first use)
static DEFAULTS_TABLE: OnceLock<AttributeTable> = OnceLock::new();

/// Built-in attribute table: covalent radii (Angstrom) and CPK colours.
/// Symbols missing here get the fallback radius and no colour.
pub fn defaults_table() -> &'static AttributeTable {
  DEFAULTS_TABLE.get_or_init(|| {
    let mut table = AttributeTable::new();
    load_embedded_elements(&mut table);
    table
  })
}

fn load_embedded_elements(table: &mut AttributeTable) {
  macro_rules! add_element {
    ($sym:expr, $r:expr, ($red:expr, $green:expr, $blue:expr)) => {
      table.insert($sym, AtomAttributes::new($r, [$red, $green, $blue]));
    };
  }

  // --- Period 1 ---
  add_element!("H", 0.37, (1.00, 1.00, 1.00));
  add_element!("He", 0.32, (0.85, 1.00, 1.00));

  // --- Period 2 ---
  add_element!("Li", 1.34, (0.80, 0.50, 1.00));
  add_element!("Be", 0.90, (0.76, 1.00, 0.00));
  add_element!("B", 0.82, (1.00, 0.70, 0.70));
  add_element!("C", 0.77, (0.20, 0.20, 0.20));
  add_element!("N", 0.75, (0.19, 0.31, 0.97));
  add_element!("O", 0.73, (1.00, 0.05, 0.05));
  add_element!("F", 0.71, (0.56, 0.88, 0.31));
  add_element!("Ne", 0.69, (0.70, 0.89, 0.96));

  // --- Period 3 ---
  add_element!("Na", 1.54, (0.67, 0.36, 0.95));
  add_element!("Mg", 1.30, (0.54, 1.00, 0.00));
  add_element!("Al", 1.18, (0.75, 0.65, 0.65));
  add_element!("Si", 1.11, (0.94, 0.78, 0.63));
  add_element!("P", 1.06, (1.00, 0.50, 0.00));
  add_element!("S", 1.02, (1.00, 1.00, 0.19));
  add_element!("Cl", 0.99, (0.12, 0.94, 0.12));
  add_element!("Ar", 0.97, (0.50, 0.82, 0.89));

  // --- Period 4 ---
  add_element!("K", 1.96, (0.56, 0.25, 0.83));
  add_element!("Ca", 1.74, (0.24, 1.00, 0.00));
  add_element!("Ti", 1.36, (0.75, 0.76, 0.78));
  add_element!("V", 1.25, (0.65, 0.65, 0.67));
  add_element!("Cr", 1.27, (0.54, 0.60, 0.78));
  add_element!("Mn", 1.39, (0.61, 0.48, 0.78));
  add_element!("Fe", 1.25, (0.88, 0.40, 0.20));
  add_element!("Co", 1.26, (0.94, 0.56, 0.63));
  add_element!("Ni", 1.21, (0.31, 0.82, 0.31));
  add_element!("Cu", 1.38, (0.78, 0.50, 0.20));
  add_element!("Zn", 1.31, (0.49, 0.50, 0.69));
  add_element!("Ga", 1.26, (0.76, 0.56, 0.56));
  add_element!("Ge", 1.22, (0.40, 0.56, 0.56));
  add_element!("As", 1.19, (0.74, 0.50, 0.89));
  add_element!("Se", 1.16, (1.00, 0.63, 0.00));
  add_element!("Br", 1.14, (0.65, 0.16, 0.16));
  add_element!("Kr", 1.10, (0.36, 0.72, 0.82));

  // --- Period 5 (selected) ---
  add_element!("Sr", 1.95, (0.00, 1.00, 0.00));
  add_element!("Zr", 1.75, (0.58, 0.88, 0.88));
  add_element!("Mo", 1.54, (0.33, 0.71, 0.71));
  add_element!("Pd", 1.39, (0.00, 0.41, 0.52));
  add_element!("Ag", 1.53, (0.75, 0.75, 0.75));
  add_element!("Sn", 1.39, (0.40, 0.50, 0.50));
  add_element!("I", 1.39, (0.58, 0.00, 0.58));

  // --- Period 6 (selected) ---
  add_element!("Ba", 2.15, (0.00, 0.79, 0.00));
  add_element!("W", 1.62, (0.13, 0.58, 0.84));
  add_element!("Pt", 1.36, (0.82, 0.82, 0.88));
  add_element!("Au", 1.44, (1.00, 0.82, 0.14));
  add_element!("Pb", 1.46, (0.34, 0.35, 0.38));
}
