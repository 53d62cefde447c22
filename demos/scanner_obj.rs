//! Demo: build a small cylindrical scanner, resolve it, export OBJ

use petgeom::io::write_obj;
use petgeom::{
    check_geometry, BoxShape, BoxSolidVolume, DetectingElement, DetectorModule, ReplicatedModule,
    RigidTransformation, ScannerGeometry,
};
use std::f32::consts::TAU;

fn main() {
    println!("=== petgeom scanner demo ===\n");

    // 12 module replicas around a ring of radius 40, each module
    // holding a 4 x 5 grid of 4mm crystals.
    let num_modules = 12;
    let radius = 40.0;

    let mut crystal_transforms = Vec::new();
    for tangential in 0..4 {
        for axial in 0..5 {
            crystal_transforms.push(RigidTransformation::from_translation([
                radius,
                (tangential as f32 - 1.5) * 4.5,
                (axial as f32 - 2.0) * 4.5,
            ]));
        }
    }

    let crystal = DetectingElement {
        object: BoxSolidVolume {
            shape: BoxShape {
                corners: BoxShape::unit()
                    .corners
                    .iter()
                    .map(|c| petgeom::Coordinate::new(c.x() * 20.0, c.y() * 4.0, c.z() * 4.0))
                    .collect(),
            },
            material_id: 1,
        },
        ids: (0..crystal_transforms.len() as u32).collect(),
        transforms: crystal_transforms,
    };

    let ring: Vec<RigidTransformation> = (0..num_modules)
        .map(|i| RigidTransformation::from_axis_angle([0.0, 0.0, 1.0], i as f32 * TAU / num_modules as f32))
        .collect();

    let scanner = ScannerGeometry {
        replicated_modules: vec![ReplicatedModule {
            object: DetectorModule {
                detecting_elements: vec![crystal],
            },
            ids: (0..ring.len() as u32).collect(),
            transforms: ring,
        }],
    };

    println!("Modules:            {}", num_modules);
    println!("Detecting elements: {}", scanner.num_detecting_elements());

    let issues = check_geometry(&scanner);
    println!("Validation issues:  {}", issues.len());

    let shapes: Vec<BoxShape> = scanner.world_shapes().collect();
    let path = "scanner.obj";
    match write_obj(&shapes, path) {
        Ok(()) => println!("Wrote {} shapes to {}", shapes.len(), path),
        Err(e) => eprintln!("Export failed: {}", e),
    }
}
