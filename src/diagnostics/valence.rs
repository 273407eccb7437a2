//! P8: vertex valence histogram.

use crate::mesh::MeshView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `valence → count of vertices with that valence`. Valence `0` (isolated
/// vertices) is omitted; use `BTreeMap` rather than `HashMap` so the
/// serialized histogram has a deterministic key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValenceDistribution {
    pub histogram: BTreeMap<u32, u64>,
}

pub fn compute(mesh: &MeshView) -> ValenceDistribution {
    let mut valence = vec![0u32; mesh.vertex_count()];
    for tri in mesh.triangles() {
        for v in tri.indices() {
            valence[v as usize] += 1;
        }
    }

    let mut histogram: BTreeMap<u32, u64> = BTreeMap::new();
    for v in valence {
        if v > 0 {
            *histogram.entry(v).or_insert(0) += 1;
        }
    }

    ValenceDistribution { histogram }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetrahedron_has_uniform_valence_three() {
        let positions = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
        ];
        let indices = [0u32, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let dist = compute(&mesh);

        assert_eq!(dist.histogram.len(), 1);
        assert_eq!(dist.histogram.get(&3), Some(&4));
    }
}
