//! Rigid transformation.

use super::Coordinate;
use nalgebra::{Matrix4, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A rigid transformation between two 3D frames.
///
/// Stored as the row-major 3x4 matrix of the scanner wire format: the
/// left 3x3 block is the rotation, the right column the translation.
///
/// Precondition (documented, not checked): the rotation block must be
/// orthonormal with determinant +1. The algebra never verifies this and
/// silently produces wrong geometry if it is violated; the opt-in
/// [`crate::check`] pass can detect the violation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransformation {
    pub matrix: [[f32; 4]; 3],
}

impl Default for RigidTransformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransformation {
    /// Creates the identity transformation (no rotation, no translation).
    pub const fn identity() -> Self {
        Self {
            matrix: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        }
    }

    /// Creates a transformation from a row-major 3x4 matrix.
    pub const fn new(matrix: [[f32; 4]; 3]) -> Self {
        Self { matrix }
    }

    /// Creates a transformation from a rotation block and a translation.
    pub const fn from_parts(rotation: [[f32; 3]; 3], translation: [f32; 3]) -> Self {
        let mut matrix = [[0.0; 4]; 3];
        let mut row = 0;
        while row < 3 {
            matrix[row][0] = rotation[row][0];
            matrix[row][1] = rotation[row][1];
            matrix[row][2] = rotation[row][2];
            matrix[row][3] = translation[row];
            row += 1;
        }
        Self { matrix }
    }

    /// Creates a pure translation.
    pub const fn from_translation(v: [f32; 3]) -> Self {
        Self::from_parts(
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            v,
        )
    }

    /// Creates a rotation by `angle` (radians) about an axis through the
    /// origin. The axis must be non-zero; it is normalized internally.
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let axis = Unit::new_normalize(Vector3::new(axis[0], axis[1], axis[2]));
        let r = Rotation3::from_axis_angle(&axis, angle);
        let m = r.matrix();
        Self::from_parts(
            [
                [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
                [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
                [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
            ],
            [0.0, 0.0, 0.0],
        )
    }

    /// Returns the rotation block.
    pub const fn rotation_part(&self) -> [[f32; 3]; 3] {
        [
            [self.matrix[0][0], self.matrix[0][1], self.matrix[0][2]],
            [self.matrix[1][0], self.matrix[1][1], self.matrix[1][2]],
            [self.matrix[2][0], self.matrix[2][1], self.matrix[2][2]],
        ]
    }

    /// Returns the translation column.
    pub const fn translation_part(&self) -> [f32; 3] {
        [self.matrix[0][3], self.matrix[1][3], self.matrix[2][3]]
    }

    /// Appends the homogeneous row `[0, 0, 0, 1]`.
    pub fn to_homogeneous(&self) -> Matrix4<f32> {
        let m = &self.matrix;
        Matrix4::new(
            m[0][0], m[0][1], m[0][2], m[0][3], //
            m[1][0], m[1][1], m[1][2], m[1][3], //
            m[2][0], m[2][1], m[2][2], m[2][3], //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Keeps the first three rows of a homogeneous matrix.
    ///
    /// Exact inverse of [`to_homogeneous`](Self::to_homogeneous) for the
    /// copied rows; the bottom row is assumed to be `[0, 0, 0, 1]` and
    /// is discarded unchecked.
    pub fn from_homogeneous(m: &Matrix4<f32>) -> Self {
        Self {
            matrix: [
                [m[(0, 0)], m[(0, 1)], m[(0, 2)], m[(0, 3)]],
                [m[(1, 0)], m[(1, 1)], m[(1, 2)], m[(1, 3)]],
                [m[(2, 0)], m[(2, 1)], m[(2, 2)], m[(2, 3)]],
            ],
        }
    }

    /// Composes an ordered chain of transformations into one.
    ///
    /// The chain is outer-to-inner: index 0 is the outermost (parent)
    /// frame, the last index the innermost (local) frame. The result is
    /// the homogeneous product `M(T0) * M(T1) * ... * M(Tn)` in input
    /// order. Matrix multiplication does not commute, so reordering the
    /// chain changes the result whenever two rotation blocks differ.
    /// The empty chain composes to the identity.
    pub fn compose(chain: &[RigidTransformation]) -> Self {
        let product = chain
            .iter()
            .fold(Matrix4::identity(), |acc, t| acc * t.to_homogeneous());
        Self::from_homogeneous(&product)
    }

    /// Applies the transformation to a coordinate (rotate, then
    /// translate), via the homogeneous product.
    pub fn apply(&self, coord: &Coordinate) -> Coordinate {
        Coordinate::from_homogeneous(self.to_homogeneous() * coord.to_homogeneous())
    }

    /// Returns the composition `self * other` (other applied first).
    pub fn multiplied(&self, other: &RigidTransformation) -> Self {
        Self::from_homogeneous(&(self.to_homogeneous() * other.to_homogeneous()))
    }

    /// Returns true if all matrix entries agree within `tolerance`.
    pub fn is_equal(&self, other: &RigidTransformation, tolerance: f32) -> bool {
        self.matrix
            .iter()
            .flatten()
            .zip(other.matrix.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl std::ops::Mul for RigidTransformation {
    type Output = RigidTransformation;
    fn mul(self, other: RigidTransformation) -> RigidTransformation {
        self.multiplied(&other)
    }
}
