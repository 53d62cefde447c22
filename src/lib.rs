//! petgeom: Pure Rust PET scanner geometry kernel
//!
//! Resolves a hierarchical scanner description (replicated detector
//! modules containing replicated detecting elements) into a flat
//! sequence of world-space box shapes ready for drawing.

pub mod algebra;
pub mod check;
pub mod io;
pub mod model;
pub mod precision;
pub mod resolve;

// Re-exports for convenience
pub use algebra::{Coordinate, RigidTransformation};
pub use check::{check_geometry, require_valid, GeometryIssue};
pub use model::{
    BoxShape, BoxSolidVolume, DetectingElement, DetectorModule, ReplicatedModule, ScannerGeometry,
};
pub use resolve::WorldShapes;

/// Result type for petgeom operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
