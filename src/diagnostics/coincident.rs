//! P13: coincident-face detection — distinct triangles lying on the same
//! plane with overlapping support and no shared vertex.

use crate::mesh::MeshView;
use crate::spatial_hash::SpatialHash;
use crate::stats::BoundingBox;

const PARALLEL_THRESHOLD: f64 = 0.999;
const NORMAL_DEGENERACY: f32 = 1e-10;

pub fn detect(mesh: &MeshView, bounding_box: Option<&BoundingBox>) -> usize {
    let triangle_count = mesh.triangle_count();
    if triangle_count == 0 {
        return 0;
    }

    let diagonal = bounding_box.map_or(0.0, |b| b.diagonal);
    let cell_size = (diagonal / (triangle_count as f64 / 10.0).sqrt()).max(1e-6);
    let plane_tolerance = diagonal * 1e-5;

    let centroids: Vec<glam::Vec3> = (0..triangle_count)
        .map(|t| mesh.triangle_centroid(t))
        .collect();

    let mut grid: SpatialHash<usize> = SpatialHash::new(cell_size);
    for (t, &c) in centroids.iter().enumerate() {
        grid.insert(c, t);
    }

    let mut count = 0usize;
    for t1 in 0..triangle_count {
        let c1 = centroids[t1];
        let mut candidates: Vec<usize> = grid
            .neighborhood(c1)
            .into_iter()
            .filter(|&t2| t2 > t1)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        for t2 in candidates {
            if shares_any_vertex(mesh, t1, t2) {
                continue;
            }

            let n1 = mesh.face_normal(t1);
            let n2 = mesh.face_normal(t2);
            if n1.length() < NORMAL_DEGENERACY || n2.length() < NORMAL_DEGENERACY {
                continue;
            }
            let n1n = n1.normalize();
            let n2n = n2.normalize();
            if n1n.dot(n2n).abs() as f64 <= PARALLEL_THRESHOLD {
                continue;
            }

            let c2 = centroids[t2];
            let centroid_distance = (c2 - c1).length() as f64;
            if centroid_distance > cell_size {
                continue;
            }

            let plane_distance = (n1n.dot(c2 - c1) as f64).abs();
            if plane_distance >= plane_tolerance {
                continue;
            }

            count += 1;
        }
    }
    count
}

fn shares_any_vertex(mesh: &MeshView, t1: usize, t2: usize) -> bool {
    let v1 = mesh.triangle(t1).indices();
    let v2 = mesh.triangle(t2).indices();
    v1.iter().any(|i| v2.contains(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn overlapping_coplanar_triangles_are_coincident() {
        let positions = [
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0,
            0.0,
        ];
        // Same three positions reused by two distinct triangles with disjoint
        // vertex indices (3,4,5 duplicate 0,1,2's positions exactly).
        let indices = [0u32, 1, 2, 3, 4, 5];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 0.0));

        assert_eq!(detect(&mesh, Some(&bbox)), 1);
    }

    #[test]
    fn non_coplanar_triangles_are_not_coincident() {
        let positions = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
            1.0,
        ];
        let indices = [0u32, 1, 2, 3, 4, 5];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));

        assert_eq!(detect(&mesh, Some(&bbox)), 0);
    }
}
