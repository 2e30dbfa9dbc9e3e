// src/error.rs

//! Error types for mode animation.
//!
//! Missing radius or colour data is not an error: the resolver falls back to
//! a fixed radius and reports the colour as unresolved.

use thiserror::Error;

/// Errors raised by the lattice, trajectory and planning entry points.
#[derive(Error, Debug)]
pub enum VibError {
  /// A mode carries a different number of displacement vectors than there are atoms
  #[error("mode has {vectors} displacement vectors but the structure has {atoms} atoms")]
  IndexMismatch { atoms: usize, vectors: usize },

  /// Frame count of zero or below
  #[error("invalid frame count {0}: at least one frame is required")]
  InvalidFrameCount(i64),

  /// Selected mode does not exist
  #[error("mode index {index} out of range ({available} modes available)")]
  ModeIndexOutOfRange { index: usize, available: usize },

  /// Near-zero cell volume (only under a strict lattice policy)
  #[error("degenerate lattice: cell volume {volume:.3e}")]
  DegenerateLattice { volume: f64 },

  /// Out-of-range radius or colour (only under a strict attribute policy)
  #[error("invalid attribute for {symbol}: {reason}")]
  InvalidAttribute { symbol: String, reason: String },

  /// Standard I/O error
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Malformed JSON in a settings or attribute-table file
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VibError>;
