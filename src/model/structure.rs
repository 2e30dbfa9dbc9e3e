use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// How an `AtomSite` position is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Coordinates {
  #[default]
  Cartesian,
  /// Fractions of the lattice vectors
  Reduced,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AtomSite {
  pub symbol: String,
  pub position: [f64; 3],
  #[serde(default)]
  pub coordinates: Coordinates,
}

impl AtomSite {
  pub fn cartesian(symbol: impl Into<String>, position: [f64; 3]) -> Self {
    Self { symbol: symbol.into(), position, coordinates: Coordinates::Cartesian }
  }

  pub fn reduced(symbol: impl Into<String>, position: [f64; 3]) -> Self {
    Self { symbol: symbol.into(), position, coordinates: Coordinates::Reduced }
  }
}

/// One vibrational mode: wavevector plus one complex displacement per atom,
/// in the same order as `Structure::atoms`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VibrationalMode {
  pub qpt: [f64; 3],
  #[serde(default)]
  pub frequency: Option<f64>,
  pub vectors: Vec<[Complex64; 3]>,
}

impl VibrationalMode {
  pub fn new(qpt: [f64; 3], vectors: Vec<[Complex64; 3]>) -> Self {
    Self { qpt, frequency: None, vectors }
  }

  /// Mode with purely real displacements (common at the Gamma point)
  pub fn from_real(qpt: [f64; 3], vectors: &[[f64; 3]]) -> Self {
    let vectors = vectors
      .iter()
      .map(|v| [Complex64::from(v[0]), Complex64::from(v[1]), Complex64::from(v[2])])
      .collect();
    Self::new(qpt, vectors)
  }
}

/// Parsed structure as handed over by a structure reader
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Structure {
  // Lattice vectors: [a_vec, b_vec, c_vec]
  pub lattice: [[f64; 3]; 3],
  pub atoms: Vec<AtomSite>,
  #[serde(default)]
  pub modes: Vec<VibrationalMode>,
}
