//! P14: problem-geometry overlay extraction.
//!
//! Reuses the counts already computed by earlier passes; this module only
//! re-derives the *positions* those passes flagged, since the diagnostics
//! record itself only carries counts and stats.

use crate::diagnostics::nonmanifold::NonManifoldVertices;
use crate::diagnostics::EdgeFaceMap;
use crate::mesh::MeshView;
use serde::{Deserialize, Serialize};

/// Five coordinate arrays a viewer can render directly as line segments or
/// points, in the same frame as the input positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub boundary_edges: Vec<f32>,
    pub non_manifold_edges: Vec<f32>,
    pub non_manifold_vertices: Vec<f32>,
    pub self_intersection_centroids: Vec<f32>,
    pub t_junction_vertices: Vec<f32>,
}

pub fn extract(
    mesh: &MeshView,
    edge_face_map: &EdgeFaceMap,
    nonmanifold: &NonManifoldVertices,
    intersections: &[(usize, usize)],
    t_junctions: &[u32],
) -> Overlay {
    let mut boundary_edges = Vec::new();
    let mut non_manifold_edges = Vec::new();
    for (&(a, b), triangles) in edge_face_map.iter() {
        let target = match triangles.len() {
            1 => &mut boundary_edges,
            n if n >= 3 => &mut non_manifold_edges,
            _ => continue,
        };
        push_point(target, mesh.vertex(a));
        push_point(target, mesh.vertex(b));
    }

    let mut non_manifold_vertices = Vec::with_capacity(nonmanifold.vertices.len() * 3);
    for &v in &nonmanifold.vertices {
        push_point(&mut non_manifold_vertices, mesh.vertex(v));
    }

    let mut self_intersection_centroids = Vec::with_capacity(intersections.len() * 3);
    for &(t1, t2) in intersections {
        let (a0, a1, a2) = mesh.triangle_vertices(t1);
        let (b0, b1, b2) = mesh.triangle_vertices(t2);
        let centroid = (a0 + a1 + a2 + b0 + b1 + b2) / 6.0;
        push_point(&mut self_intersection_centroids, centroid);
    }

    let mut t_junction_vertices = Vec::with_capacity(t_junctions.len() * 3);
    for &v in t_junctions {
        push_point(&mut t_junction_vertices, mesh.vertex(v));
    }

    Overlay {
        boundary_edges,
        non_manifold_edges,
        non_manifold_vertices,
        self_intersection_centroids,
        t_junction_vertices,
    }
}

fn push_point(target: &mut Vec<f32>, p: glam::Vec3) {
    target.push(p.x);
    target.push(p.y);
    target.push(p.z);
}
