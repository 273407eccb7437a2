//! Serialization contract: the report's field names must match the
//! camelCase external contract in spec.md §6, and the whole record must
//! round-trip through JSON without loss.

use mesh_diagnostics::analyze;

#[test]
fn diagnostics_serializes_to_camel_case_json() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = [0u32, 1, 2];
    let result = analyze(&positions, &indices).unwrap();

    let json = serde_json::to_value(&result.diagnostics).unwrap();
    let obj = json.as_object().unwrap();

    for field in [
        "vertexCount",
        "triangleCount",
        "boundaryEdgeCount",
        "nonManifoldEdgeCount",
        "windingConsistencyPercent",
        "windingCheckSkipped",
        "thinWallThreshold",
        "isWatertight",
        "isManifold",
        "hasConsistentWinding",
    ] {
        assert!(obj.contains_key(field), "missing field {field}");
    }
}

#[test]
fn analysis_result_round_trips_through_json() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0];
    let indices = [0u32, 1, 2, 0, 2, 3];
    let result = analyze(&positions, &indices).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let roundtripped: mesh_diagnostics::AnalysisResult = serde_json::from_str(&json).unwrap();

    assert_eq!(
        roundtripped.diagnostics.triangle_count,
        result.diagnostics.triangle_count
    );
    assert_eq!(
        roundtripped.overlay.boundary_edges,
        result.overlay.boundary_edges
    );
}
