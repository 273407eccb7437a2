//! P4: non-manifold vertex (pinch / bowtie) detection.
//!
//! A vertex is non-manifold if its incident faces form two or more disjoint
//! fans around it. We build, per vertex, the link graph of its incident
//! triangles' "other two" vertices and BFS it: if the walk doesn't reach
//! every node, the fan is split.

use crate::mesh::MeshView;
use std::collections::{HashMap, HashSet, VecDeque};

pub struct NonManifoldVertices {
    pub count: usize,
    pub vertices: Vec<u32>,
}

pub fn detect(mesh: &MeshView) -> NonManifoldVertices {
    let vertex_count = mesh.vertex_count();
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    for (t, tri) in mesh.triangles().enumerate() {
        for v in tri.indices() {
            incident[v as usize].push(t);
        }
    }

    let mut vertices = Vec::new();
    for v in 0..vertex_count as u32 {
        let incident_triangles = &incident[v as usize];
        if incident_triangles.len() <= 1 {
            continue;
        }

        if !is_single_fan(mesh, v, incident_triangles) {
            vertices.push(v);
        }
    }

    NonManifoldVertices {
        count: vertices.len(),
        vertices,
    }
}

fn is_single_fan(mesh: &MeshView, v: u32, incident_triangles: &[usize]) -> bool {
    let mut link: HashMap<u32, Vec<u32>> = HashMap::new();
    for &t in incident_triangles {
        let others: Vec<u32> = mesh
            .triangle(t)
            .indices()
            .into_iter()
            .filter(|&x| x != v)
            .collect();
        if let [a, b] = others[..] {
            link.entry(a).or_default().push(b);
            link.entry(b).or_default().push(a);
        }
    }

    if link.is_empty() {
        return true;
    }

    let start = *link.keys().next().unwrap();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some(cur) = queue.pop_front() {
        if let Some(neighbors) = link.get(&cur) {
            for &n in neighbors {
                if visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }
    }

    visited.len() == link.len()
}
