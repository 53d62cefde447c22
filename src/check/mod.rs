//! Scanner geometry validation
//!
//! Opt-in defensive checks over a decoded scanner hierarchy:
//! - Rotation blocks that are not proper rotations (non-orthonormal or
//!   determinant != +1), which the algebra would otherwise propagate
//!   silently as wrong geometry
//! - Shapes whose corner count is not 8
//! - Replica id lists that do not run parallel to their transform lists
//!
//! Checking never mutates the hierarchy and never runs on the resolve
//! path, so well-formed input resolves to identical numbers whether or
//! not it was checked.

use crate::algebra::RigidTransformation;
use crate::model::ScannerGeometry;
use crate::{precision, GeomError, Result};
use nalgebra::Matrix3;

/// Issues found during geometry validation
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryIssue {
    /// Rotation block is not a proper rotation
    NonOrthonormalRotation {
        location: String,
        determinant: f32,
    },

    /// Shape corner count differs from the 8 corners of a box
    BadCornerCount {
        location: String,
        count: usize,
    },

    /// Replica ids present but not parallel to the transform list
    ReplicaIdMismatch {
        location: String,
        transforms: usize,
        ids: usize,
    },
}

impl std::fmt::Display for GeometryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryIssue::NonOrthonormalRotation {
                location,
                determinant,
            } => write!(
                f,
                "{}: rotation block is not a proper rotation (det {})",
                location, determinant
            ),
            GeometryIssue::BadCornerCount { location, count } => {
                write!(f, "{}: shape has {} corners, expected 8", location, count)
            }
            GeometryIssue::ReplicaIdMismatch {
                location,
                transforms,
                ids,
            } => write!(
                f,
                "{}: {} replica ids for {} transforms",
                location, ids, transforms
            ),
        }
    }
}

/// Checks the whole hierarchy and returns every issue found.
pub fn check_geometry(scanner: &ScannerGeometry) -> Vec<GeometryIssue> {
    let mut issues = Vec::new();

    for (m, module) in scanner.replicated_modules.iter().enumerate() {
        let module_loc = format!("module {}", m);
        check_replicas(&module_loc, &module.transforms, &module.ids, &mut issues);

        for (e, element) in module.object.detecting_elements.iter().enumerate() {
            let element_loc = format!("module {} / element {}", m, e);
            check_replicas(&element_loc, &element.transforms, &element.ids, &mut issues);

            let count = element.object.shape.corners.len();
            if count != 8 {
                issues.push(GeometryIssue::BadCornerCount {
                    location: element_loc,
                    count,
                });
            }
        }
    }

    issues
}

/// Checks the hierarchy and fails on the first collection of issues.
///
/// Strict-superset behavior for callers that want structural rejection
/// instead of silently wrong geometry.
pub fn require_valid(scanner: &ScannerGeometry) -> Result<()> {
    let issues = check_geometry(scanner);
    if issues.is_empty() {
        Ok(())
    } else {
        let details: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        Err(GeomError::InvalidGeometry(details.join("; ")))
    }
}

fn check_replicas(
    location: &str,
    transforms: &[RigidTransformation],
    ids: &[u32],
    issues: &mut Vec<GeometryIssue>,
) {
    if !ids.is_empty() && ids.len() != transforms.len() {
        issues.push(GeometryIssue::ReplicaIdMismatch {
            location: location.to_string(),
            transforms: transforms.len(),
            ids: ids.len(),
        });
    }

    for (t, transform) in transforms.iter().enumerate() {
        if !is_proper_rotation(transform) {
            let r = rotation_matrix(transform);
            issues.push(GeometryIssue::NonOrthonormalRotation {
                location: format!("{} / transform {}", location, t),
                determinant: r.determinant(),
            });
        }
    }
}

fn rotation_matrix(transform: &RigidTransformation) -> Matrix3<f32> {
    let r = transform.rotation_part();
    Matrix3::new(
        r[0][0], r[0][1], r[0][2], //
        r[1][0], r[1][1], r[1][2], //
        r[2][0], r[2][1], r[2][2],
    )
}

fn is_proper_rotation(transform: &RigidTransformation) -> bool {
    let r = rotation_matrix(transform);
    let drift = r * r.transpose() - Matrix3::identity();
    drift.iter().all(|v| v.abs() <= precision::ANGULAR)
        && (r.determinant() - 1.0).abs() <= precision::ANGULAR
}
