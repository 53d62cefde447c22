//! Scanner description data model.
//!
//! Statically-typed records for the decoded scanner hierarchy: a
//! [`ScannerGeometry`] owns replicated detector modules, each module
//! owns replicated detecting elements, each element owns a local box
//! shape. The core only ever reads these; resolution derives fresh
//! values and leaves the hierarchy untouched.

use crate::algebra::{Coordinate, RigidTransformation};
use serde::{Deserialize, Serialize};

/// An ordered list of box corners in one frame.
///
/// Nominally 8 corners, but the algebra is agnostic to the count: every
/// operation transforms the list element-wise and preserves order and
/// length exactly. The order is meaningless here and load-bearing for
/// the drawing sink, which connects consecutive corners with line
/// segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub corners: Vec<Coordinate>,
}

impl BoxShape {
    /// Returns the shape with every corner transformed, same order,
    /// same count.
    pub fn transformed(&self, t: &RigidTransformation) -> BoxShape {
        BoxShape {
            corners: self.corners.iter().map(|c| t.apply(c)).collect(),
        }
    }

    /// The axis-aligned unit box centred on the origin, corners at
    /// (±0.5, ±0.5, ±0.5).
    pub fn unit() -> BoxShape {
        let h = 0.5;
        BoxShape {
            corners: vec![
                Coordinate::new(-h, -h, -h),
                Coordinate::new(h, -h, -h),
                Coordinate::new(h, h, -h),
                Coordinate::new(-h, h, -h),
                Coordinate::new(-h, -h, h),
                Coordinate::new(h, -h, h),
                Coordinate::new(h, h, h),
                Coordinate::new(-h, h, h),
            ],
        }
    }
}

/// A solid detecting crystal: its local shape plus a material tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSolidVolume {
    pub shape: BoxShape,
    pub material_id: u32,
}

/// A detecting element replicated at several positions inside its
/// module, one replica per transform. `ids`, when present, runs
/// parallel to `transforms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectingElement {
    pub object: BoxSolidVolume,
    pub transforms: Vec<RigidTransformation>,
    #[serde(default)]
    pub ids: Vec<u32>,
}

/// One detector sub-assembly: the elements it contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorModule {
    pub detecting_elements: Vec<DetectingElement>,
}

/// A module replicated at several physical positions, one replica per
/// transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicatedModule {
    pub object: DetectorModule,
    pub transforms: Vec<RigidTransformation>,
    #[serde(default)]
    pub ids: Vec<u32>,
}

/// The full scanner layout: every module with its replicas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerGeometry {
    pub replicated_modules: Vec<ReplicatedModule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision;

    #[test]
    fn test_unit_box_has_8_corners() {
        let shape = BoxShape::unit();
        assert_eq!(shape.corners.len(), 8);
        for corner in &shape.corners {
            assert!((corner.distance(&Coordinate::origin()) - 0.75f32.sqrt()).abs()
                < precision::CONFUSION);
        }
    }

    #[test]
    fn test_transformed_preserves_count_and_order() {
        let t = RigidTransformation::from_translation([10.0, 0.0, 0.0]);
        let shape = BoxShape::unit();
        let moved = shape.transformed(&t);

        assert_eq!(moved.corners.len(), shape.corners.len());
        for (before, after) in shape.corners.iter().zip(&moved.corners) {
            assert!(after.is_equal(&t.apply(before), precision::CONFUSION));
        }
    }

    #[test]
    fn test_transformed_is_agnostic_to_corner_count() {
        // Not a box at all: a 3-corner list passes through element-wise.
        let t = RigidTransformation::from_translation([0.0, 0.0, 1.0]);
        let shape = BoxShape {
            corners: vec![
                Coordinate::new(0.0, 0.0, 0.0),
                Coordinate::new(1.0, 0.0, 0.0),
                Coordinate::new(0.0, 1.0, 0.0),
            ],
        };
        let moved = shape.transformed(&t);
        assert_eq!(moved.corners.len(), 3);
        assert!(moved.corners[2].is_equal(&Coordinate::new(0.0, 1.0, 1.0), precision::CONFUSION));
    }
}
