//! Decode boundary: typed scanner hierarchy from a JSON header graph

use petgeom::io::scanner_from_reader;
use petgeom::{GeomError, ScannerGeometry};

const HEADER: &str = r#"{
  "replicated_modules": [
    {
      "object": {
        "detecting_elements": [
          {
            "object": {
              "shape": {
                "corners": [
                  { "c": [-0.5, -0.5, -0.5] },
                  { "c": [ 0.5, -0.5, -0.5] },
                  { "c": [ 0.5,  0.5, -0.5] },
                  { "c": [-0.5,  0.5, -0.5] },
                  { "c": [-0.5, -0.5,  0.5] },
                  { "c": [ 0.5, -0.5,  0.5] },
                  { "c": [ 0.5,  0.5,  0.5] },
                  { "c": [-0.5,  0.5,  0.5] }
                ]
              },
              "material_id": 1
            },
            "transforms": [
              { "matrix": [[1.0, 0.0, 0.0, 4.0],
                           [0.0, 1.0, 0.0, 0.0],
                           [0.0, 0.0, 1.0, 0.0]] },
              { "matrix": [[1.0, 0.0, 0.0, 6.0],
                           [0.0, 1.0, 0.0, 0.0],
                           [0.0, 0.0, 1.0, 0.0]] }
            ],
            "ids": [0, 1]
          }
        ]
      },
      "transforms": [
        { "matrix": [[0.0, -1.0, 0.0, 0.0],
                     [1.0,  0.0, 0.0, 0.0],
                     [0.0,  0.0, 1.0, 0.0]] }
      ],
      "ids": [0]
    }
  ]
}"#;

#[test]
fn test_decode_header_graph() {
    let scanner = scanner_from_reader(HEADER.as_bytes()).expect("header should decode");

    assert_eq!(scanner.replicated_modules.len(), 1);
    let module = &scanner.replicated_modules[0];
    assert_eq!(module.transforms.len(), 1);
    assert_eq!(module.object.detecting_elements.len(), 1);
    assert_eq!(module.object.detecting_elements[0].transforms.len(), 2);
    assert_eq!(scanner.num_detecting_elements(), 2);

    // First replica: crystal at +4 in module x, module rotated 90
    // degrees about z, so the world centre sits near (0, 4, 0).
    let shape = scanner.world_shapes().next().expect("one shape expected");
    let y: f32 = shape.corners.iter().map(|c| c.y()).sum::<f32>() / 8.0;
    assert!((y - 4.0).abs() < 1e-4);
}

#[test]
fn test_decode_round_trips_through_serde() {
    let scanner = scanner_from_reader(HEADER.as_bytes()).expect("header should decode");
    let encoded = serde_json::to_string(&scanner).expect("scanner should encode");
    let again: ScannerGeometry =
        serde_json::from_str(&encoded).expect("re-encoded scanner should decode");
    assert_eq!(again, scanner);
}

#[test]
fn test_missing_structure_is_a_fatal_decode_error() {
    // Element without its transform list: structural absence, not
    // recoverable.
    let truncated = r#"{
      "replicated_modules": [
        {
          "object": {
            "detecting_elements": [
              { "object": { "shape": { "corners": [] }, "material_id": 0 } }
            ]
          },
          "transforms": []
        }
      ]
    }"#;

    let err = scanner_from_reader(truncated.as_bytes()).expect_err("decode should fail");
    assert!(matches!(err, GeomError::Decode(_)));
}
