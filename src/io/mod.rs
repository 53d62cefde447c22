//! Boundary I/O: scanner description decode and line-geometry export

mod obj;

pub use obj::write_obj;

use crate::model::ScannerGeometry;
use crate::Result;
use std::fs::File;
use std::io::{BufReader, Read};

/// Decodes a scanner geometry from a JSON-exported header graph.
///
/// Stand-in for the external binary stream reader: the hierarchy is
/// statically typed, so any structurally absent field (missing
/// transform list, missing shape) fails the decode and is surfaced as a
/// fatal [`GeomError::Decode`](crate::GeomError::Decode).
pub fn scanner_from_reader<R: Read>(reader: R) -> Result<ScannerGeometry> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a scanner geometry from a JSON file.
pub fn read_scanner(path: &str) -> Result<ScannerGeometry> {
    let file = File::open(path)?;
    scanner_from_reader(BufReader::new(file))
}
