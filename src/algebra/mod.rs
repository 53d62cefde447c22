//! Rigid-transform algebra.
//!
//! The foundation of the crate: cartesian coordinates, rigid
//! transformations stored as 3x4 matrices, and chain composition via
//! homogeneous 4x4 matrix products. Everything downstream (shape
//! placement, hierarchy resolution) is built on these two types.

mod coordinate;
mod transform;

pub use coordinate::Coordinate;
pub use transform::RigidTransformation;
