//! P11: T-junction detection — a vertex lying on the interior of an edge it
//! is not topologically connected to.

use crate::diagnostics::EdgeFaceMap;
use crate::mesh::MeshView;
use crate::spatial_hash::SpatialHash;
use crate::stats::BoundingBox;

pub fn detect(
    mesh: &MeshView,
    edge_face_map: &EdgeFaceMap,
    bounding_box: Option<&BoundingBox>,
) -> Vec<u32> {
    let diagonal = bounding_box.map_or(0.0, |b| b.diagonal);
    let tolerance = diagonal * 1e-4;
    let cell_size = (10.0 * tolerance).max(1e-6);
    let tolerance_sq = tolerance * tolerance;

    let mut grid: SpatialHash<(u32, u32)> = SpatialHash::new(cell_size);
    for (&(e0, e1), _) in edge_face_map.iter() {
        let p0 = mesh.vertex(e0);
        let p1 = mesh.vertex(e1);
        let mid = (p0 + p1) * 0.5;
        grid.insert(p0, (e0, e1));
        grid.insert(p1, (e0, e1));
        grid.insert(mid, (e0, e1));
    }

    let mut qualifying = Vec::new();
    for v in 0..mesh.vertex_count() as u32 {
        let p = mesh.vertex(v);
        let mut candidates = grid.neighborhood(p);
        candidates.sort_unstable();
        candidates.dedup();

        let mut is_t_junction = false;
        for (e0, e1) in candidates {
            if v == e0 || v == e1 {
                continue;
            }
            let p0 = mesh.vertex(e0);
            let p1 = mesh.vertex(e1);
            let edge_vec = p1 - p0;
            let len_sq = edge_vec.length_squared() as f64;
            if len_sq < 1e-20 {
                continue;
            }
            let t = ((p - p0).dot(edge_vec) as f64) / len_sq;
            if !(0.01 < t && t < 0.99) {
                continue;
            }
            let closest = p0 + edge_vec * (t as f32);
            let perp_dist_sq = (p - closest).length_squared() as f64;
            if perp_dist_sq >= tolerance_sq {
                continue;
            }
            if vertex_incident_on_edge_triangle(mesh, edge_face_map, v, e0, e1) {
                continue;
            }
            is_t_junction = true;
            break;
        }

        if is_t_junction {
            qualifying.push(v);
        }
    }

    qualifying
}

fn vertex_incident_on_edge_triangle(
    mesh: &MeshView,
    edge_face_map: &EdgeFaceMap,
    v: u32,
    e0: u32,
    e1: u32,
) -> bool {
    edge_face_map
        .triangles((e0, e1))
        .iter()
        .any(|&t| mesh.triangle(t).indices().contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn midpoint_vertex_on_foreign_edge_is_a_t_junction() {
        // Triangle A spans a long edge (0,1); triangle B's apex (vertex 3)
        // sits exactly on that edge's midpoint without sharing it.
        let positions = [
            0.0, 0.0, 0.0, // 0
            2.0, 0.0, 0.0, // 1
            1.0, 1.0, 0.0, // 2
            1.0, 0.0, 0.0, // 3 (T-junction vertex)
            1.0, -1.0, 0.0, // 4
        ];
        let indices = [0u32, 1, 2, 3, 1, 4];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let map = EdgeFaceMap::build(&mesh);
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, -1.0, 0.0), Vec3::new(2.0, 1.0, 0.0));

        let result = detect(&mesh, &map, Some(&bbox));
        assert!(result.contains(&3));
    }
}
