//! P7: duplicate-vertex detection via a single-cell spatial hash probe.
//!
//! Only the owning cell is probed, not its neighbors: a duplicate that
//! straddles a cell boundary is missed. This mirrors the specified
//! behavior exactly rather than the more thorough 27-neighborhood check
//! (see the design notes on this tradeoff).

use crate::mesh::MeshView;
use crate::options::AnalysisOptions;
use crate::spatial_hash::SpatialHash;

pub fn count(mesh: &MeshView, options: &AnalysisOptions) -> usize {
    let eps = options.duplicate_vertex_epsilon;
    let mut grid: SpatialHash<u32> = SpatialHash::new(10.0 * eps);
    let eps_sq = (eps * eps) as f32;

    let mut duplicate_count = 0usize;
    for v in 0..mesh.vertex_count() as u32 {
        let p = mesh.vertex(v);
        let is_duplicate = grid
            .own_cell(p)
            .iter()
            .any(|&other| (mesh.vertex(other) - p).length_squared() < eps_sq);
        if is_duplicate {
            duplicate_count += 1;
        }
        grid.insert(p, v);
    }
    duplicate_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_duplicate_position_is_counted() {
        let positions = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, // duplicate of vertex 1
        ];
        let indices = [0u32, 1, 2];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let options = AnalysisOptions::default();

        assert_eq!(count(&mesh, &options), 1);
    }

    #[test]
    fn distinct_vertices_have_no_duplicates() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0u32, 1, 2];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let options = AnalysisOptions::default();

        assert_eq!(count(&mesh, &options), 0);
    }
}
