// src/physics/mod.rs
pub mod lattice;
pub mod phonon;
pub mod scene;

pub use lattice::{
  bounding_box_geometry, cartesian_with_cell_offset, cell_to_vectors, reduced_to_cartesian,
  BoundingBox, CellIndex, CellParameters, LatticeVectors,
};
pub use phonon::{generate_trajectory, Trajectory, DEFAULT_FRAME_COUNT};
pub use scene::{plan_from_config, plan_scene, AttributeSources, ModeSelection, ScenePlan};
