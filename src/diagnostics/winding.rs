//! P5: winding-consistency analysis via directed-edge counting.

use crate::mesh::MeshView;
use std::collections::HashMap;

pub struct WindingResult {
    pub inconsistent_count: usize,
    pub consistency_percent: f64,
    /// Always `false` here; the capacity guard (§4.1) short-circuits before
    /// this pass runs at all, so a `true` value is only ever reported at the
    /// [`Diagnostics`](super::Diagnostics) level, not produced by this pass.
    pub skipped: bool,
}

pub fn analyze(mesh: &MeshView) -> WindingResult {
    let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in mesh.triangles() {
        for (a, b) in tri.edges() {
            *directed.entry((a, b)).or_insert(0) += 1;
        }
    }

    let mut seen = std::collections::HashSet::new();
    let mut manifold_edges = 0usize;
    let mut inconsistent = 0usize;

    for &(a, b) in directed.keys() {
        let edge = crate::mesh::canonical_edge(a, b);
        if !seen.insert(edge) {
            continue;
        }
        let f = *directed.get(&(edge.0, edge.1)).unwrap_or(&0);
        let g = *directed.get(&(edge.1, edge.0)).unwrap_or(&0);
        if f + g != 2 {
            continue;
        }
        manifold_edges += 1;
        if !((f == 1 && g == 1)) {
            inconsistent += 1;
        }
    }

    let consistency_percent = if manifold_edges == 0 {
        100.0
    } else {
        100.0 * (manifold_edges - inconsistent) as f64 / manifold_edges as f64
    };

    WindingResult {
        inconsistent_count: inconsistent,
        consistency_percent,
        skipped: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_has_no_manifold_edges() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0u32, 1, 2];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let result = analyze(&mesh);

        assert_eq!(result.inconsistent_count, 0);
        assert_eq!(result.consistency_percent, 100.0);
    }

    #[test]
    fn flipped_shared_face_is_inconsistent() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0];
        // Second triangle reuses edge (1,2) in the same direction as the first.
        let indices = [0u32, 1, 2, 1, 2, 3];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let result = analyze(&mesh);

        assert_eq!(result.inconsistent_count, 1);
        assert!(result.consistency_percent < 100.0);
    }
}
