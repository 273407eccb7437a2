//! P9: dihedral-angle analysis over manifold (exactly-two-incidence) edges.

use crate::diagnostics::EdgeFaceMap;
use crate::mesh::MeshView;
use crate::options::AnalysisOptions;
use crate::stats::DistributionStats;

pub struct DihedralResult {
    pub sharp_count: usize,
    pub coplanar_count: usize,
    pub angle_stats: Option<DistributionStats>,
}

pub fn analyze(
    mesh: &MeshView,
    edge_face_map: &EdgeFaceMap,
    options: &AnalysisOptions,
) -> DihedralResult {
    let normals: Vec<glam::Vec3> = (0..mesh.triangle_count())
        .map(|t| mesh.face_normal(t))
        .collect();

    let mut sharp_count = 0usize;
    let mut coplanar_count = 0usize;
    let mut angle_samples = Vec::new();

    for (_, triangles) in edge_face_map.iter() {
        if triangles.len() != 2 {
            continue;
        }
        let n1 = normals[triangles[0]];
        let n2 = normals[triangles[1]];
        if n1.length() < 1e-10 || n2.length() < 1e-10 {
            continue;
        }

        let cos_theta = (n1.normalize().dot(n2.normalize())).clamp(-1.0, 1.0);
        let alpha_deg = (cos_theta.acos() as f64).to_degrees();
        let dihedral_deg = 180.0 - alpha_deg;

        if dihedral_deg < options.sharp_angle_deg {
            sharp_count += 1;
        }
        if dihedral_deg > options.coplanar_angle_deg {
            coplanar_count += 1;
        }
        angle_samples.push(dihedral_deg);
    }

    DihedralResult {
        sharp_count,
        coplanar_count,
        angle_stats: DistributionStats::compute(&mut angle_samples),
    }
}
