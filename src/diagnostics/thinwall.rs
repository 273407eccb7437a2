//! P12: thin-wall detection — vertices close to geometry they don't share
//! a triangle with.

use crate::mesh::MeshView;
use crate::options::AnalysisOptions;
use crate::spatial_hash::SpatialHash;
use crate::stats::BoundingBox;
use std::collections::HashSet;

pub fn detect(
    mesh: &MeshView,
    bounding_box: Option<&BoundingBox>,
    options: &AnalysisOptions,
) -> usize {
    let vertex_count = mesh.vertex_count();
    if vertex_count == 0 {
        return 0;
    }

    let diagonal = bounding_box.map_or(0.0, |b| b.diagonal);
    let threshold = diagonal * options.thin_wall_fraction;
    let cell_size = (3.0 * threshold).max(1e-6);

    let mut neighbors: Vec<HashSet<u32>> = vec![HashSet::new(); vertex_count];
    for tri in mesh.triangles() {
        let [i0, i1, i2] = tri.indices();
        for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
            neighbors[a as usize].insert(b);
            neighbors[b as usize].insert(a);
        }
    }

    let mut grid: SpatialHash<u32> = SpatialHash::new(cell_size);
    for v in 0..vertex_count as u32 {
        grid.insert(mesh.vertex(v), v);
    }

    let mut count = 0usize;
    for v in 0..vertex_count as u32 {
        let p = mesh.vertex(v);
        let candidates = grid.neighborhood(p);
        let has_thin_wall_partner = candidates.iter().any(|&other| {
            other != v
                && !neighbors[v as usize].contains(&other)
                && is_within_open_interval(p, mesh.vertex(other), threshold)
        });
        if has_thin_wall_partner {
            count += 1;
        }
    }
    count
}

fn is_within_open_interval(a: glam::Vec3, b: glam::Vec3, threshold: f64) -> bool {
    let dist = (b - a).length() as f64;
    dist > 1e-10 && dist < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn two_disconnected_sheets_closer_than_threshold_are_thin_walls() {
        let gap = 0.001;
        let positions = [
            0.0, 0.0, 0.0, // 0
            1.0, 0.0, 0.0, // 1
            0.0, 1.0, 0.0, // 2
            0.0, 0.0, gap, // 3 (sits just above vertex 0, no shared triangle)
            1.0, 0.0, gap, // 4
            0.0, 1.0, gap, // 5
        ];
        let indices = [0u32, 1, 2, 3, 4, 5];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, gap));
        let options = AnalysisOptions::default();

        let count = detect(&mesh, Some(&bbox), &options);
        assert!(count > 0);
    }

    #[test]
    fn single_triangle_has_no_thin_walls() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0u32, 1, 2];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let options = AnalysisOptions::default();

        assert_eq!(detect(&mesh, Some(&bbox), &options), 0);
    }
}
