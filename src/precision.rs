//! Precision constants for geometric comparisons.
//!
//! Scanner descriptions carry single-precision matrices, so all
//! tolerances here are calibrated for `f32` arithmetic.

/// Confusion tolerance for checking coincidence of two points.
/// Two points are coincident if their distance < CONFUSION.
/// Value: 1.0e-5 (millimeter-scale geometry in f32)
pub const CONFUSION: f32 = 1.0e-5;

/// Square of CONFUSION for performance.
pub const SQUARE_CONFUSION: f32 = CONFUSION * CONFUSION;

/// Angular tolerance for orthonormality checks on rotation blocks.
/// A rotation block is accepted when |R·Rᵀ − I| and |det R − 1| stay
/// below this bound elementwise.
/// Value: 1.0e-4
pub const ANGULAR: f32 = 1.0e-4;
