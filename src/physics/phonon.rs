// src/physics/phonon.rs

//! Per-atom animation of a single phonon mode.
//!
//! The displacement of atom j in cell l for mode ν is
//!
//! ```text
//! u(jl, t) = U(j, q, ν) · exp(i [q · r(jl) − ω t])
//! ```
//!
//! (M. T. Dove, Introduction to Lattice Dynamics, 1993, eq. 6.18). Time is
//! replaced by the frame index with t = 2π f / (ω N), so one period spans
//! exactly N frames and ω drops out:
//!
//! ```text
//! r'(f) = r + Re[ U · exp(i [q · r − 2π f / N]) ]
//! ```
//!
//! Frame N would repeat frame 0 and is not emitted.

use crate::error::{Result, VibError};
use crate::model::VibrationalMode;
use crate::utils::geometry::{self, Point3};
use num_complex::Complex64;
use std::f64::consts::PI;

pub const DEFAULT_FRAME_COUNT: i64 = 30;

/// Complex displacement vector of one atom in one mode
pub type Displacement = [Complex64; 3];

/// Positions of one atom over one oscillation period, in frame order
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory(Vec<Point3>);

impl Trajectory {
  pub fn frames(&self) -> &[Point3] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
    self.0.iter()
  }

  /// Largest distance from `origin` reached during the cycle
  pub fn max_displacement(&self, origin: Point3) -> f64 {
    self
      .0
      .iter()
      .map(|&p| geometry::calculate_distance(p, origin))
      .fold(0.0, f64::max)
  }

  pub fn into_inner(self) -> Vec<Point3> {
    self.0
  }
}

impl<'a> IntoIterator for &'a Trajectory {
  type Item = &'a Point3;
  type IntoIter = std::slice::Iter<'a, Point3>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// Position at `frame` of a `frame_count`-frame cycle. Any frame index is
/// accepted, including `frame_count` itself (which reproduces frame 0).
pub fn displaced_position(
  r: Point3,
  qpt: Point3,
  displacement: &Displacement,
  frame: i64,
  frame_count: i64,
) -> Point3 {
  let phase = geometry::dot(qpt, r) - 2.0 * PI * frame as f64 / frame_count as f64;
  let e = Complex64::from_polar(1.0, phase);
  [
    r[0] + (displacement[0] * e).re,
    r[1] + (displacement[1] * e).re,
    r[2] + (displacement[2] * e).re,
  ]
}

/// One full cycle for an atom at Cartesian equilibrium position `r`
pub fn generate_trajectory(
  r: Point3,
  qpt: Point3,
  displacement: &Displacement,
  frame_count: i64,
) -> Result<Trajectory> {
  if frame_count <= 0 {
    return Err(VibError::InvalidFrameCount(frame_count));
  }
  Ok(Trajectory(
    (0..frame_count)
      .map(|frame| displaced_position(r, qpt, displacement, frame, frame_count))
      .collect(),
  ))
}

/// A mode must carry exactly one displacement per atom
pub fn check_alignment(atom_count: usize, mode: &VibrationalMode) -> Result<()> {
  if mode.vectors.len() != atom_count {
    return Err(VibError::IndexMismatch { atoms: atom_count, vectors: mode.vectors.len() });
  }
  Ok(())
}
