// src/utils/geometry.rs

pub type Point3 = [f64; 3];

pub fn add(a: Point3, b: Point3) -> Point3 {
  [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Point3, b: Point3) -> Point3 {
  [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: Point3, s: f64) -> Point3 {
  [v[0] * s, v[1] * s, v[2] * s]
}

pub fn dot(a: Point3, b: Point3) -> f64 {
  a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Point3, b: Point3) -> Point3 {
  [
    a[1] * b[2] - a[2] * b[1],
    a[2] * b[0] - a[0] * b[2],
    a[0] * b[1] - a[1] * b[0],
  ]
}

pub fn len(a: Point3) -> f64 {
  dot(a, a).sqrt()
}

/// Distance between two points (Angstroms)
pub fn calculate_distance(p1: Point3, p2: Point3) -> f64 {
  len(sub(p1, p2))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cross_is_orthogonal() {
    let a = [1.0, 2.0, 3.0];
    let b = [-2.0, 0.5, 4.0];
    let c = cross(a, b);
    assert!(dot(a, c).abs() < 1e-12);
    assert!(dot(b, c).abs() < 1e-12);
  }

  #[test]
  fn test_distance() {
    let d = calculate_distance([1.0, 1.0, 1.0], [4.0, 5.0, 1.0]);
    assert!((d - 5.0).abs() < 1e-12);
  }
}
