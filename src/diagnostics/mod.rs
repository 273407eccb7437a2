//! The analysis pipeline: one module per pass in the pipeline table, plus
//! the [`Diagnostics`]/[`Overlay`] records and the [`analyze`] entry point
//! that threads shared intermediates (the edge-face map, in particular)
//! across the passes that need them.

mod coincident;
mod dihedral;
mod duplicates;
mod intersect;
mod nonmanifold;
mod overlay;
mod quality;
mod thinwall;
mod tjunction;
mod topology;
mod valence;
mod winding;

pub use overlay::Overlay;
pub use topology::EdgeFaceMap;
pub use valence::ValenceDistribution;

use crate::error::Result;
use crate::mesh::MeshView;
use crate::options::AnalysisOptions;
use crate::stats::{BoundingBox, DistributionStats};
use serde::{Deserialize, Serialize};

/// The full diagnostics report for one mesh.
///
/// Integer fields are `-1` only when [`windingCheckSkipped`](Self::winding_check_skipped)
/// is set by the triangle-count capacity guard (§4.1); every other in-contract
/// input (empty mesh, zero-area triangles, a single connected component, ...)
/// produces well-defined, non-sentinel values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub vertex_count: i64,
    pub triangle_count: i64,
    pub edge_count: i64,
    pub boundary_edge_count: i64,
    pub non_manifold_edge_count: i64,
    pub non_manifold_vertex_count: i64,
    pub connected_components: i64,
    pub euler_characteristic: i64,
    pub degenerate_triangle_count: i64,
    pub winding_inconsistent_edge_count: i64,
    pub duplicate_vertex_count: i64,
    pub tiny_triangle_count: i64,
    pub needle_triangle_count: i64,
    pub isolated_vertex_count: i64,
    pub sharp_edge_count: i64,
    pub coplanar_edge_count: i64,
    pub self_intersection_count: i64,
    pub t_junction_count: i64,
    pub thin_wall_count: i64,
    pub coincident_face_count: i64,

    pub winding_consistency_percent: f64,
    pub winding_check_skipped: bool,
    pub thin_wall_threshold: f64,

    pub edge_length_stats: Option<DistributionStats>,
    pub aspect_ratio_stats: Option<DistributionStats>,
    pub dihedral_angle_stats: Option<DistributionStats>,
    pub valence_distribution: Option<ValenceDistribution>,
    pub bounding_box: Option<BoundingBox>,

    pub is_watertight: bool,
    pub is_manifold: bool,
    pub has_non_manifold_vertices: bool,
    pub has_consistent_winding: bool,
}

/// The result of one [`analyze`] call: the diagnostics record plus the
/// problem-geometry overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub diagnostics: Diagnostics,
    pub overlay: Overlay,
}

/// Analyze a mesh with the default [`AnalysisOptions`].
pub fn analyze(positions: &[f32], indices: &[u32]) -> Result<AnalysisResult> {
    analyze_with_options(positions, indices, &AnalysisOptions::default())
}

/// Analyze a mesh, overriding the default detection thresholds.
pub fn analyze_with_options(
    positions: &[f32],
    indices: &[u32],
    options: &AnalysisOptions,
) -> Result<AnalysisResult> {
    let mesh = MeshView::new(positions, indices)?;

    let vertex_count = mesh.vertex_count();
    let triangle_count = mesh.triangle_count();
    let bounding_box = compute_bounding_box(&mesh);

    if triangle_count > options.max_triangle_count {
        return Ok(capacity_limited_result(
            vertex_count,
            triangle_count,
            bounding_box,
            options,
        ));
    }

    let edge_face_map = EdgeFaceMap::build(&mesh);
    let topo = topology::compute(&mesh, &edge_face_map);
    let nonmanifold_vertices = nonmanifold::detect(&mesh);
    let winding = winding::analyze(&mesh);
    let quality = quality::analyze(&mesh, bounding_box.as_ref());
    let duplicate_vertex_count = duplicates::count(&mesh, options);
    let valence_distribution = valence::compute(&mesh);
    let dihedral = dihedral::analyze(&mesh, &edge_face_map, options);
    let intersections = intersect::detect(&mesh, bounding_box.as_ref());
    let t_junctions = tjunction::detect(&mesh, &edge_face_map, bounding_box.as_ref());
    let thin_walls = thinwall::detect(&mesh, bounding_box.as_ref(), options);
    let coincident_faces = coincident::detect(&mesh, bounding_box.as_ref());

    let is_watertight = topo.boundary_edge_count == 0;
    let is_manifold = topo.non_manifold_edge_count == 0;
    let has_non_manifold_vertices = nonmanifold_vertices.count > 0;
    let has_consistent_winding = !winding.skipped && winding.consistency_percent >= 99.5;

    let diagnostics = Diagnostics {
        vertex_count: vertex_count as i64,
        triangle_count: triangle_count as i64,
        edge_count: topo.edge_count as i64,
        boundary_edge_count: topo.boundary_edge_count as i64,
        non_manifold_edge_count: topo.non_manifold_edge_count as i64,
        non_manifold_vertex_count: nonmanifold_vertices.count as i64,
        connected_components: topo.connected_components as i64,
        euler_characteristic: topo.euler_characteristic,
        degenerate_triangle_count: quality.degenerate_count as i64,
        winding_inconsistent_edge_count: winding.inconsistent_count as i64,
        duplicate_vertex_count: duplicate_vertex_count as i64,
        tiny_triangle_count: quality.tiny_count as i64,
        needle_triangle_count: quality.needle_count as i64,
        isolated_vertex_count: topo.isolated_vertex_count as i64,
        sharp_edge_count: dihedral.sharp_count as i64,
        coplanar_edge_count: dihedral.coplanar_count as i64,
        self_intersection_count: intersections.len() as i64,
        t_junction_count: t_junctions.len() as i64,
        thin_wall_count: thin_walls as i64,
        coincident_face_count: coincident_faces as i64,

        winding_consistency_percent: winding.consistency_percent,
        winding_check_skipped: winding.skipped,
        thin_wall_threshold: options.thin_wall_fraction,

        edge_length_stats: quality.edge_length_stats,
        aspect_ratio_stats: quality.aspect_ratio_stats,
        dihedral_angle_stats: dihedral.angle_stats,
        valence_distribution: Some(valence_distribution).filter(|v| !v.histogram.is_empty()),
        bounding_box,

        is_watertight,
        is_manifold,
        has_non_manifold_vertices,
        has_consistent_winding,
    };

    let overlay = overlay::extract(
        &mesh,
        &edge_face_map,
        &nonmanifold_vertices,
        &intersections,
        &t_junctions,
    );

    Ok(AnalysisResult {
        diagnostics,
        overlay,
    })
}

fn compute_bounding_box(mesh: &MeshView) -> Option<BoundingBox> {
    if mesh.vertex_count() == 0 {
        return None;
    }

    #[cfg(feature = "parallel")]
    let (min, max) = {
        use rayon::prelude::*;
        (0..mesh.vertex_count() as u32)
            .into_par_iter()
            .map(|v| {
                let p = mesh.vertex(v);
                (p, p)
            })
            .reduce(
                || (glam::Vec3::splat(f32::INFINITY), glam::Vec3::splat(f32::NEG_INFINITY)),
                |(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)),
            )
    };

    #[cfg(not(feature = "parallel"))]
    let (min, max) = {
        let mut min = glam::Vec3::splat(f32::INFINITY);
        let mut max = glam::Vec3::splat(f32::NEG_INFINITY);
        for v in 0..mesh.vertex_count() as u32 {
            let p = mesh.vertex(v);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    };

    Some(BoundingBox::from_min_max(min, max))
}

fn capacity_limited_result(
    vertex_count: usize,
    triangle_count: usize,
    bounding_box: Option<BoundingBox>,
    options: &AnalysisOptions,
) -> AnalysisResult {
    AnalysisResult {
        diagnostics: Diagnostics {
            vertex_count: vertex_count as i64,
            triangle_count: triangle_count as i64,
            edge_count: -1,
            boundary_edge_count: -1,
            non_manifold_edge_count: -1,
            non_manifold_vertex_count: -1,
            connected_components: -1,
            euler_characteristic: -1,
            degenerate_triangle_count: -1,
            winding_inconsistent_edge_count: -1,
            duplicate_vertex_count: -1,
            tiny_triangle_count: -1,
            needle_triangle_count: -1,
            isolated_vertex_count: -1,
            sharp_edge_count: -1,
            coplanar_edge_count: -1,
            self_intersection_count: -1,
            t_junction_count: -1,
            thin_wall_count: -1,
            coincident_face_count: -1,

            winding_consistency_percent: -1.0,
            winding_check_skipped: true,
            thin_wall_threshold: options.thin_wall_fraction,

            edge_length_stats: None,
            aspect_ratio_stats: None,
            dihedral_angle_stats: None,
            valence_distribution: None,
            bounding_box,

            is_watertight: false,
            is_manifold: false,
            has_non_manifold_vertices: false,
            has_consistent_winding: false,
        },
        overlay: Overlay::default(),
    }
}
