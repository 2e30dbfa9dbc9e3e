// src/physics/scene.rs

use super::lattice::{self, BoundingBox, CellIndex};
use super::phonon::{self, Trajectory, DEFAULT_FRAME_COUNT};
use crate::config::Config;
use crate::error::{Result, VibError};
use crate::model::{
  defaults_table, resolve, AttributeTable, Coordinates, ResolvedAttributes, Structure,
};
use crate::utils::geometry::Point3;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Which wavevector drives the phase term q · r
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum WavevectorSource {
  /// Zero vector: every cell moves in phase
  #[default]
  Gamma,
  /// The selected mode's own q-point
  FromMode,
  Explicit([f64; 3]),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeSelection {
  pub mode_index: usize,
  pub wavevector: WavevectorSource,
  pub cell_id: CellIndex,
  pub frame_count: i64,
  /// Multiplies every resolved radius
  pub scale_factor: f64,
}

impl Default for ModeSelection {
  fn default() -> Self {
    Self {
      mode_index: 10,
      wavevector: WavevectorSource::Gamma,
      cell_id: [0, 0, 0],
      frame_count: DEFAULT_FRAME_COUNT,
      scale_factor: 1.0,
    }
  }
}

/// Attribute tables in priority order; absent tiers are skipped
#[derive(Debug, Clone, Copy)]
pub struct AttributeSources<'a> {
  pub overrides: Option<&'a AttributeTable>,
  pub user: Option<&'a AttributeTable>,
  pub defaults: &'a AttributeTable,
}

impl<'a> AttributeSources<'a> {
  pub fn defaults_only(defaults: &'a AttributeTable) -> Self {
    Self { overrides: None, user: None, defaults }
  }

  pub fn resolve(&self, symbol: &str) -> ResolvedAttributes {
    resolve(symbol, self.overrides, self.user, self.defaults)
  }
}

/// Everything Scene Assembly needs for one atom
#[derive(Debug, Clone)]
pub struct AnimatedAtom {
  pub index: usize,
  /// "{index}_{symbol}"
  pub name: String,
  pub symbol: String,
  /// Equilibrium Cartesian position in the selected cell
  pub position: Point3,
  /// Resolved radius times the selection's scale factor
  pub radius: f64,
  pub color: Option<[f64; 3]>,
  pub trajectory: Trajectory,
}

#[derive(Debug, Clone)]
pub struct ScenePlan {
  pub bounding_box: BoundingBox,
  pub atoms: Vec<AnimatedAtom>,
  pub frame_count: usize,
}

/// Computes positions, attributes and trajectories for every atom of the
/// selected mode. All preconditions are checked before any trajectory is
/// built, so the plan is either complete or not produced at all.
pub fn plan_scene(
  structure: &Structure,
  selection: &ModeSelection,
  sources: AttributeSources<'_>,
) -> Result<ScenePlan> {
  let mode = structure.modes.get(selection.mode_index).ok_or(VibError::ModeIndexOutOfRange {
    index: selection.mode_index,
    available: structure.modes.len(),
  })?;
  phonon::check_alignment(structure.atoms.len(), mode)?;
  if selection.frame_count <= 0 {
    return Err(VibError::InvalidFrameCount(selection.frame_count));
  }

  let qpt = match selection.wavevector {
    WavevectorSource::Gamma => [0.0; 3],
    WavevectorSource::FromMode => mode.qpt,
    WavevectorSource::Explicit(q) => q,
  };
  debug!(
    "Planning mode {} of {}: {} atoms, q = {:?}, cell {:?}, {} frames",
    selection.mode_index,
    structure.modes.len(),
    structure.atoms.len(),
    qpt,
    selection.cell_id,
    selection.frame_count
  );

  let lattice = &structure.lattice;
  let atoms = structure
    .atoms
    .par_iter()
    .zip(mode.vectors.par_iter())
    .enumerate()
    .map(|(index, (site, displacement))| -> Result<AnimatedAtom> {
      let position = match site.coordinates {
        Coordinates::Reduced => {
          lattice::reduced_to_cartesian(site.position, lattice, selection.cell_id)
        }
        Coordinates::Cartesian => {
          lattice::cartesian_with_cell_offset(site.position, lattice, selection.cell_id)
        }
      };
      let attributes = sources.resolve(&site.symbol);
      let trajectory =
        phonon::generate_trajectory(position, qpt, displacement, selection.frame_count)?;
      Ok(AnimatedAtom {
        index,
        name: format!("{}_{}", index, site.symbol),
        symbol: site.symbol.clone(),
        position,
        radius: attributes.radius * selection.scale_factor,
        color: attributes.color,
        trajectory,
      })
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(ScenePlan {
    bounding_box: lattice::bounding_box_geometry(lattice),
    atoms,
    frame_count: selection.frame_count as usize,
  })
}

/// Plans with the selection, tables and validation policies held by `config`
pub fn plan_from_config(structure: &Structure, config: &Config) -> Result<ScenePlan> {
  lattice::check_lattice(&structure.lattice, config.lattice_validation)?;
  let user = config.load_user_table()?;
  let sources = AttributeSources {
    overrides: Some(&config.overrides),
    user: user.as_ref(),
    defaults: defaults_table(),
  };
  plan_scene(structure, &config.selection, sources)
}
