//! Phonon mode animation for crystal structures.
//!
//! Takes a parsed structure (lattice, atom sites, vibrational modes) and
//! produces per-atom equilibrium positions, radius/colour attributes and
//! per-frame trajectories for one oscillation of a selected mode, plus the
//! unit-cell wireframe. Building meshes, materials and keyframes from these
//! values is left to the host renderer.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod utils;

pub use config::{Config, ValidationPolicy};
pub use error::{Result, VibError};
