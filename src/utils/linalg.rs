// src/utils/linalg.rs

use nalgebra::{Matrix3, Vector3};

/// Lattice rows [[ax, ay, az], [bx, by, bz], [cx, cy, cz]] as a matrix
pub fn lattice_matrix(lattice: [[f64; 3]; 3]) -> Matrix3<f64> {
  Matrix3::from_row_slice(&[
    lattice[0][0],
    lattice[0][1],
    lattice[0][2],
    lattice[1][0],
    lattice[1][1],
    lattice[1][2],
    lattice[2][0],
    lattice[2][1],
    lattice[2][2],
  ])
}

/// Convert fractional coordinates to Cartesian using lattice matrix
///
/// # Arguments
/// * `frac` - Fractional coordinates [x, y, z]; values outside [0, 1] address neighbouring cells
/// * `lattice` - Lattice vectors as row matrix [[ax, ay, az], [bx, by, bz], [cx, cy, cz]]
///
/// # Formula
/// ```text
/// Cartesian = Lattice^T × Fractional
/// ```
pub fn frac_to_cart(frac: [f64; 3], lattice: [[f64; 3]; 3]) -> [f64; 3] {
  let cart_vec = lattice_matrix(lattice).transpose() * Vector3::from(frac);
  [cart_vec.x, cart_vec.y, cart_vec.z]
}

/// Convert Cartesian coordinates to fractional using lattice matrix
///
/// Returns None if the lattice is singular.
///
/// # Formula
/// ```text
/// Fractional = (Lattice^T)^-1 × Cartesian
/// ```
pub fn cart_to_frac(cart: [f64; 3], lattice: [[f64; 3]; 3]) -> Option<[f64; 3]> {
  let inv_lat = lattice_matrix(lattice).transpose().try_inverse()?;
  let frac_vec = inv_lat * Vector3::from(cart);
  Some([frac_vec.x, frac_vec.y, frac_vec.z])
}

/// Signed cell volume a · (b × c)
pub fn determinant(lattice: [[f64; 3]; 3]) -> f64 {
  lattice_matrix(lattice).determinant()
}
