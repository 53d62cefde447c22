//! Wavefront OBJ line-geometry export

use crate::model::BoxShape;
use crate::Result;
use std::fs::File;
use std::io::Write;

/// Write world-space shapes to Wavefront OBJ as line geometry
///
/// The OBJ format uses:
/// - `v x y z` for corner positions
/// - `l i j k ...` for a polyline through corners (1-indexed)
///
/// One `l` record is written per shape, connecting its corners in their
/// stored order (the drawing-sink contract: consecutive corners joined
/// by line segments, not necessarily closed or convex).
///
/// # Example
/// ```rust,no_run
/// use petgeom::{BoxShape, ScannerGeometry};
/// use petgeom::io::write_obj;
///
/// let scanner = ScannerGeometry { replicated_modules: vec![] };
/// let shapes: Vec<BoxShape> = scanner.world_shapes().collect();
/// write_obj(&shapes, "scanner.obj").unwrap();
/// ```
pub fn write_obj(shapes: &[BoxShape], path: &str) -> Result<()> {
    let mut file = File::create(path)?;

    let corner_total: usize = shapes.iter().map(|s| s.corners.len()).sum();
    writeln!(file, "# Wavefront OBJ exported by petgeom")?;
    writeln!(file, "# Shapes: {}", shapes.len())?;
    writeln!(file, "# Corners: {}", corner_total)?;
    writeln!(file)?;

    // OBJ indices are 1-based and global across all shapes.
    let mut next_index = 1;
    for shape in shapes {
        for corner in &shape.corners {
            writeln!(file, "v {:.6} {:.6} {:.6}", corner.x(), corner.y(), corner.z())?;
        }

        if !shape.corners.is_empty() {
            let indices: Vec<String> = (next_index..next_index + shape.corners.len())
                .map(|i| i.to_string())
                .collect();
            writeln!(file, "l {}", indices.join(" "))?;
        }
        next_index += shape.corners.len();
    }

    Ok(())
}
