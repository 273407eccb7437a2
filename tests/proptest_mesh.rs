//! Property-based tests over randomly generated triangle soups.

use mesh_diagnostics::analyze;
use proptest::prelude::*;

fn arb_mesh(max_vertices: usize, max_triangles: usize) -> impl Strategy<Value = (Vec<f32>, Vec<u32>)> {
    (3..=max_vertices, 0..=max_triangles).prop_flat_map(|(vertex_count, triangle_count)| {
        let positions = prop::collection::vec(-10.0f32..10.0, vertex_count * 3);
        let indices = prop::collection::vec(0..vertex_count as u32, triangle_count * 3);
        (positions, indices)
    })
}

proptest! {
    #[test]
    fn analyze_never_panics_on_in_contract_input((positions, indices) in arb_mesh(16, 20)) {
        prop_assert!(analyze(&positions, &indices).is_ok());
    }

    #[test]
    fn euler_characteristic_matches_its_formula((positions, indices) in arb_mesh(16, 20)) {
        let result = analyze(&positions, &indices).unwrap();
        let d = result.diagnostics;
        prop_assert_eq!(
            d.euler_characteristic,
            d.vertex_count - d.isolated_vertex_count - d.edge_count + d.triangle_count
        );
    }

    #[test]
    fn edge_incidence_classes_sum_to_edge_count((positions, indices) in arb_mesh(16, 20)) {
        let result = analyze(&positions, &indices).unwrap();
        let d = result.diagnostics;
        let manifold_edges = d.edge_count - d.boundary_edge_count - d.non_manifold_edge_count;
        prop_assert!(manifold_edges >= 0);
        prop_assert_eq!(
            d.boundary_edge_count + manifold_edges + d.non_manifold_edge_count,
            d.edge_count
        );
    }

    #[test]
    fn derived_booleans_match_their_counts((positions, indices) in arb_mesh(16, 20)) {
        let result = analyze(&positions, &indices).unwrap();
        let d = result.diagnostics;
        prop_assert_eq!(d.is_watertight, d.boundary_edge_count == 0);
        prop_assert_eq!(d.is_manifold, d.non_manifold_edge_count == 0);
        prop_assert_eq!(d.has_non_manifold_vertices, d.non_manifold_vertex_count > 0);
    }
}
