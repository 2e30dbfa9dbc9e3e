// src/physics/lattice.rs

//! Unit-cell geometry: cell parameters to lattice vectors, reduced and
//! Cartesian positions in any periodic image, and the cell's wireframe box.

use crate::config::ValidationPolicy;
use crate::error::{Result, VibError};
use crate::utils::geometry::{add, scale, Point3};
use crate::utils::linalg;
use serde::{Deserialize, Serialize};

/// Rows a, b, c
pub type LatticeVectors = [[f64; 3]; 3];

/// Periodic image of the unit cell; (0, 0, 0) is the origin cell
pub type CellIndex = [i32; 3];

/// Volumes below this are treated as a collapsed cell
pub const MIN_CELL_VOLUME: f64 = 1e-8;

/// Raw cell description as produced by a structure reader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CellParameters {
  /// v_sim layout: dxx, dyx, dyy, dzx, dzy, dzz (lower-triangular cell)
  VSim([f64; 6]),
  /// Lengths in Angstrom, angles in degrees; a along x, b in the xy-plane.
  /// A gamma of 0 or 180 degrees, or an angle triple that cannot close a cell,
  /// gives non-finite or collapsed vectors; only `check_lattice` flags them.
  Lengths { a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64 },
  Vectors(LatticeVectors),
}

pub fn cell_to_vectors(cell: &CellParameters) -> LatticeVectors {
  match *cell {
    CellParameters::VSim([dxx, dyx, dyy, dzx, dzy, dzz]) => {
      [[dxx, 0.0, 0.0], [dyx, dyy, 0.0], [dzx, dzy, dzz]]
    }
    CellParameters::Lengths { a, b, c, alpha, beta, gamma } => {
      let (cos_a, cos_b) = (alpha.to_radians().cos(), beta.to_radians().cos());
      let (sin_g, cos_g) = gamma.to_radians().sin_cos();
      let v = (1.0 - cos_a.powi(2) - cos_b.powi(2) - cos_g.powi(2)
        + 2.0 * cos_a * cos_b * cos_g)
        .sqrt();
      [
        [a, 0.0, 0.0],
        [b * cos_g, b * sin_g, 0.0],
        [c * cos_b, c * (cos_a - cos_b * cos_g) / sin_g, c * v / sin_g],
      ]
    }
    CellParameters::Vectors(lattice) => lattice,
  }
}

/// Σᵢ (reduced[i] + cell_id[i]) · lattice[i]
pub fn reduced_to_cartesian(reduced: Point3, lattice: &LatticeVectors, cell_id: CellIndex) -> Point3 {
  let shifted = [
    reduced[0] + cell_id[0] as f64,
    reduced[1] + cell_id[1] as f64,
    reduced[2] + cell_id[2] as f64,
  ];
  linalg::frac_to_cart(shifted, *lattice)
}

/// cartesian + Σᵢ cell_id[i] · lattice[i]
pub fn cartesian_with_cell_offset(
  cartesian: Point3,
  lattice: &LatticeVectors,
  cell_id: CellIndex,
) -> Point3 {
  lattice
    .iter()
    .zip(cell_id)
    .fold(cartesian, |pos, (vector, n)| add(pos, scale(*vector, n as f64)))
}

pub fn cartesian_to_reduced(cartesian: Point3, lattice: &LatticeVectors) -> Option<Point3> {
  linalg::cart_to_frac(cartesian, *lattice)
}

/// Parallelepiped spanned by the lattice vectors
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
  /// 0, a, a+b, b, c, c+a, c+a+b, c+b
  pub vertices: [Point3; 8],
  /// Quadrilaterals as indices into `vertices`
  pub faces: [[usize; 4]; 6],
}

pub const BOX_FACES: [[usize; 4]; 6] = [
  [0, 1, 2, 3],
  [0, 1, 5, 4],
  [1, 2, 6, 5],
  [2, 3, 7, 6],
  [3, 0, 4, 7],
  [4, 5, 6, 7],
];

pub fn bounding_box_geometry(lattice: &LatticeVectors) -> BoundingBox {
  let [a, b, c] = *lattice;
  let origin = [0.0; 3];
  let ab = add(a, b);
  BoundingBox {
    vertices: [origin, a, ab, b, c, add(c, a), add(c, ab), add(c, b)],
    faces: BOX_FACES,
  }
}

/// Signed volume a · (b × c)
pub fn cell_volume(lattice: &LatticeVectors) -> f64 {
  linalg::determinant(*lattice)
}

/// Applies the degeneracy policy; collapsed cells are otherwise passed through unchanged
pub fn check_lattice(lattice: &LatticeVectors, policy: ValidationPolicy) -> Result<()> {
  let volume = cell_volume(lattice);
  if volume.abs() < MIN_CELL_VOLUME || !volume.is_finite() {
    policy.report(VibError::DegenerateLattice { volume })?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  const TOL: f64 = 1e-10;

  fn assert_close(a: Point3, b: Point3) {
    for i in 0..3 {
      assert!((a[i] - b[i]).abs() < TOL, "{:?} != {:?}", a, b);
    }
  }

  fn stretched() -> LatticeVectors {
    [[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
  }

  #[test]
  fn test_reduced_to_cartesian() {
    assert_close(reduced_to_cartesian([0.5, 0.0, 0.0], &stretched(), [0, 0, 0]), [1.0, 0.0, 0.0]);
    assert_close(
      reduced_to_cartesian([0.5, 0.5, 0.5], &stretched(), [-1, 2, 0]),
      [-1.0, 2.5, 0.5],
    );
  }

  #[test]
  fn test_cartesian_offset() {
    assert_close(cartesian_with_cell_offset([0.0; 3], &stretched(), [1, 0, 0]), [2.0, 0.0, 0.0]);
    assert_close(
      cartesian_with_cell_offset([0.3, 0.2, 0.1], &stretched(), [0, 0, 0]),
      [0.3, 0.2, 0.1],
    );
    assert_close(
      cartesian_with_cell_offset([0.3, 0.2, 0.1], &stretched(), [-1, -1, 3]),
      [-1.7, -0.8, 3.1],
    );
  }

  #[test]
  fn test_offset_forms_agree() {
    let lattice = [[4.0, 0.0, 0.0], [2.0, 3.46, 0.0], [0.5, 0.3, 5.0]];
    let frac = [0.25, 0.6, 0.1];
    let cell = [2, -1, 1];
    let origin_cart = reduced_to_cartesian(frac, &lattice, [0, 0, 0]);
    assert_close(
      cartesian_with_cell_offset(origin_cart, &lattice, cell),
      reduced_to_cartesian(frac, &lattice, cell),
    );
    assert_close(cartesian_to_reduced(origin_cart, &lattice).unwrap(), frac);
  }

  #[test]
  fn test_vsim_cell() {
    let lattice = cell_to_vectors(&CellParameters::VSim([3.0, 1.0, 2.5, 0.5, 0.4, 4.0]));
    assert_eq!(lattice, [[3.0, 0.0, 0.0], [1.0, 2.5, 0.0], [0.5, 0.4, 4.0]]);
  }

  #[test]
  fn test_lengths_and_angles() {
    let cubic = cell_to_vectors(&CellParameters::Lengths {
      a: 3.0, b: 3.0, c: 3.0, alpha: 90.0, beta: 90.0, gamma: 90.0,
    });
    assert_close(cubic[0], [3.0, 0.0, 0.0]);
    assert_close(cubic[1], [0.0, 3.0, 0.0]);
    assert_close(cubic[2], [0.0, 0.0, 3.0]);

    let hex = cell_to_vectors(&CellParameters::Lengths {
      a: 2.0, b: 2.0, c: 5.0, alpha: 90.0, beta: 90.0, gamma: 120.0,
    });
    assert_close(hex[1], [-1.0, 3.0_f64.sqrt(), 0.0]);
    assert_close(hex[2], [0.0, 0.0, 5.0]);
    let expected = 2.0 * 2.0 * 5.0 * (120.0_f64).to_radians().sin();
    assert!((cell_volume(&hex) - expected).abs() < 1e-9);
  }

  #[test]
  fn test_vectors_passthrough() {
    assert_eq!(cell_to_vectors(&CellParameters::Vectors(stretched())), stretched());
  }

  #[test]
  fn test_unit_cube_box() {
    let cube = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let bbox = bounding_box_geometry(&cube);

    let mut corners: Vec<Point3> = bbox.vertices.to_vec();
    corners.sort_by(|p, q| p.partial_cmp(q).unwrap());
    let mut expected = Vec::new();
    for x in 0..=1 {
      for y in 0..=1 {
        for z in 0..=1 {
          expected.push([x as f64, y as f64, z as f64]);
        }
      }
    }
    expected.sort_by(|p, q| p.partial_cmp(q).unwrap());
    assert_eq!(corners, expected);

    for face in &bbox.faces {
      let mut idx = face.to_vec();
      idx.sort();
      idx.dedup();
      assert_eq!(idx.len(), 4);

      // Coplanar: fourth corner lies in the plane of the first three
      let p: Vec<Point3> = face.iter().map(|&i| bbox.vertices[i]).collect();
      let u = crate::utils::geometry::sub(p[1], p[0]);
      let v = crate::utils::geometry::sub(p[2], p[0]);
      let w = crate::utils::geometry::sub(p[3], p[0]);
      let n = crate::utils::geometry::cross(u, v);
      assert!(crate::utils::geometry::dot(n, w).abs() < TOL);
    }
  }

  #[test]
  fn test_degenerate_lattice_policy() {
    let flat = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 3.0, 0.0]];
    assert!(cell_volume(&flat).abs() < TOL);
    assert!(check_lattice(&flat, ValidationPolicy::Off).is_ok());
    assert!(check_lattice(&flat, ValidationPolicy::Warn).is_ok());
    assert!(matches!(
      check_lattice(&flat, ValidationPolicy::Strict),
      Err(VibError::DegenerateLattice { .. })
    ));
    assert!(check_lattice(&stretched(), ValidationPolicy::Strict).is_ok());

    let flat_gamma = cell_to_vectors(&CellParameters::Lengths {
      a: 1.0, b: 1.0, c: 1.0, alpha: 90.0, beta: 90.0, gamma: 180.0,
    });
    assert!(check_lattice(&flat_gamma, ValidationPolicy::Off).is_ok());
    assert!(matches!(
      check_lattice(&flat_gamma, ValidationPolicy::Strict),
      Err(VibError::DegenerateLattice { .. })
    ));

    // Geometry still comes out, just flat
    let bbox = bounding_box_geometry(&flat);
    assert!(bbox.vertices.iter().all(|v| v[2] == 0.0));
  }
}
