//! P1 (edge-face map) and P3 (topology counters): boundary/non-manifold
//! edge classification, connected components via union-find over used
//! vertices, and the Euler characteristic.

use crate::mesh::{canonical_edge, MeshView};
use std::collections::HashMap;

/// Maps each undirected edge to the triangle indices incident on it.
///
/// Invariant: for each triangle `(i0,i1,i2)`, exactly the three edges
/// `{i0,i1},{i1,i2},{i2,i0}` appear with that triangle's index appended,
/// once each.
pub struct EdgeFaceMap {
    map: HashMap<(u32, u32), Vec<usize>>,
}

impl EdgeFaceMap {
    pub fn build(mesh: &MeshView) -> Self {
        let mut map: HashMap<(u32, u32), Vec<usize>> = HashMap::new();
        for (t, tri) in mesh.triangles().enumerate() {
            for (a, b) in tri.edges() {
                map.entry(canonical_edge(a, b)).or_default().push(t);
            }
        }
        Self { map }
    }

    pub fn edge_count(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(u32, u32), &Vec<usize>)> {
        self.map.iter()
    }

    pub fn incidence(&self, edge: (u32, u32)) -> usize {
        self.map.get(&canonical_edge(edge.0, edge.1)).map_or(0, Vec::len)
    }

    pub fn triangles(&self, edge: (u32, u32)) -> &[usize] {
        self.map
            .get(&canonical_edge(edge.0, edge.1))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub struct TopologyCounters {
    pub edge_count: usize,
    pub boundary_edge_count: usize,
    pub non_manifold_edge_count: usize,
    pub connected_components: usize,
    pub isolated_vertex_count: usize,
    pub euler_characteristic: i64,
}

struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
        }
    }

    fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            let root = self.find(self.parent[x as usize]);
            self.parent[x as usize] = root;
        }
        self.parent[x as usize]
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra as usize] = rb;
        }
    }
}

pub fn compute(mesh: &MeshView, edge_face_map: &EdgeFaceMap) -> TopologyCounters {
    let vertex_count = mesh.vertex_count();

    let mut boundary_edge_count = 0usize;
    let mut non_manifold_edge_count = 0usize;
    for (_, triangles) in edge_face_map.iter() {
        match triangles.len() {
            1 => boundary_edge_count += 1,
            2 => {}
            _ => non_manifold_edge_count += 1,
        }
    }

    let mut uf = UnionFind::new(vertex_count);
    let mut used = vec![false; vertex_count];
    for tri in mesh.triangles() {
        let [i0, i1, i2] = tri.indices();
        used[i0 as usize] = true;
        used[i1 as usize] = true;
        used[i2 as usize] = true;
        uf.union(i0, i1);
        uf.union(i1, i2);
    }

    let used_vertex_count = used.iter().filter(|&&u| u).count();
    let isolated_vertex_count = vertex_count - used_vertex_count;

    let mut roots = std::collections::HashSet::new();
    for v in 0..vertex_count as u32 {
        if used[v as usize] {
            roots.insert(uf.find(v));
        }
    }
    let connected_components = roots.len();

    let euler_characteristic =
        used_vertex_count as i64 - edge_face_map.edge_count() as i64 + mesh.triangle_count() as i64;

    TopologyCounters {
        edge_count: edge_face_map.edge_count(),
        boundary_edge_count,
        non_manifold_edge_count,
        connected_components,
        isolated_vertex_count,
        euler_characteristic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshView;

    #[test]
    fn single_triangle_has_three_boundary_edges() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0u32, 1, 2];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let map = EdgeFaceMap::build(&mesh);
        let topo = compute(&mesh, &map);

        assert_eq!(topo.edge_count, 3);
        assert_eq!(topo.boundary_edge_count, 3);
        assert_eq!(topo.non_manifold_edge_count, 0);
        assert_eq!(topo.connected_components, 1);
        assert_eq!(topo.isolated_vertex_count, 0);
    }
}
