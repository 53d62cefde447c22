//! 3D coordinate.

use nalgebra::{Point3, Vector4};
use serde::{Deserialize, Serialize};

/// A cartesian coordinate in some local or world frame.
///
/// Pure value type: two coordinates with the same components are the
/// same coordinate. Single precision, matching the scanner wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub c: [f32; 3],
}

impl Coordinate {
    /// Creates a coordinate at the origin (0, 0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { c: [0.0; 3] }
    }

    /// Creates a coordinate from components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { c: [x, y, z] }
    }

    /// Returns the X component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.c[0]
    }

    /// Returns the Y component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.c[1]
    }

    /// Returns the Z component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.c[2]
    }

    /// Returns the coordinate as a nalgebra point.
    #[inline]
    pub fn as_point(&self) -> Point3<f32> {
        Point3::new(self.c[0], self.c[1], self.c[2])
    }

    /// Lifts to homogeneous form `[x, y, z, 1]`.
    #[inline]
    pub fn to_homogeneous(&self) -> Vector4<f32> {
        Vector4::new(self.c[0], self.c[1], self.c[2], 1.0)
    }

    /// Drops the homogeneous component.
    ///
    /// Affine, not projective: the fourth component is assumed to be
    /// exactly 1 and is discarded, never divided by. Feeding a vector
    /// with any other fourth component is a caller error and yields
    /// silently wrong geometry.
    #[inline]
    pub fn from_homogeneous(h: Vector4<f32>) -> Self {
        Self::new(h[0], h[1], h[2])
    }

    /// Computes the distance to another coordinate.
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> f32 {
        self.square_distance(other).sqrt()
    }

    /// Computes the square distance to another coordinate.
    #[inline]
    pub fn square_distance(&self, other: &Coordinate) -> f32 {
        let dx = self.c[0] - other.c[0];
        let dy = self.c[1] - other.c[1];
        let dz = self.c[2] - other.c[2];
        dx * dx + dy * dy + dz * dz
    }

    /// Returns true if distance to other <= linear_tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Coordinate, linear_tolerance: f32) -> bool {
        self.distance(other) <= linear_tolerance
    }
}

impl From<[f32; 3]> for Coordinate {
    fn from(arr: [f32; 3]) -> Self {
        Self { c: arr }
    }
}

impl From<Coordinate> for [f32; 3] {
    fn from(coord: Coordinate) -> Self {
        coord.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision;

    #[test]
    fn test_coordinate_origin() {
        let c = Coordinate::origin();
        assert_eq!(c.x(), 0.0);
        assert_eq!(c.y(), 0.0);
        assert_eq!(c.z(), 0.0);
    }

    #[test]
    fn test_coordinate_distance() {
        let a = Coordinate::new(0.0, 0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < precision::CONFUSION);
    }

    #[test]
    fn test_coordinate_is_equal() {
        let a = Coordinate::new(1.0, 2.0, 3.0);
        let b = Coordinate::new(1.0 + 1e-7, 2.0, 3.0);
        assert!(a.is_equal(&b, precision::CONFUSION));
    }

    #[test]
    fn test_homogeneous_round_trip() {
        let c = Coordinate::new(1.5, -2.0, 0.25);
        let h = c.to_homogeneous();
        assert_eq!(h[3], 1.0);
        assert_eq!(Coordinate::from_homogeneous(h), c);
    }
}
