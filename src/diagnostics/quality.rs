//! P6: per-triangle quality classification (degenerate, tiny, needle) plus
//! edge-length and aspect-ratio distributions.

use crate::mesh::MeshView;
use crate::stats::{BoundingBox, DistributionStats};

pub struct QualityResult {
    pub degenerate_count: usize,
    pub tiny_count: usize,
    pub needle_count: usize,
    pub edge_length_stats: Option<DistributionStats>,
    pub aspect_ratio_stats: Option<DistributionStats>,
}

/// Per-triangle area, edge lengths and aspect ratio. Computing one of these
/// reads only that triangle's own vertices, so the scan across all `T`
/// triangles is embarrassingly parallel.
struct TriangleMetrics {
    area: f64,
    edges: [f64; 3],
    aspect_ratio: f64,
}

fn triangle_metrics(mesh: &MeshView, t: usize) -> TriangleMetrics {
    let area = mesh.triangle_area(t);
    let (a, b, c) = mesh.triangle_vertices(t);
    let e0 = (b - a).length() as f64;
    let e1 = (c - b).length() as f64;
    let e2 = (a - c).length() as f64;

    let max_edge = e0.max(e1).max(e2);
    let h_min = if max_edge > 0.0 {
        2.0 * area / max_edge
    } else {
        0.0
    };
    let aspect_ratio = if area <= 0.0 || h_min < 1e-10 {
        f64::INFINITY
    } else {
        max_edge / h_min
    };

    TriangleMetrics {
        area,
        edges: [e0, e1, e2],
        aspect_ratio,
    }
}

pub fn analyze(mesh: &MeshView, _bounding_box: Option<&BoundingBox>) -> QualityResult {
    let triangle_count = mesh.triangle_count();
    if triangle_count == 0 {
        return QualityResult {
            degenerate_count: 0,
            tiny_count: 0,
            needle_count: 0,
            edge_length_stats: None,
            aspect_ratio_stats: None,
        };
    }

    let sample_count = triangle_count.min(1000);
    let mean_edge_length = {
        let mut sum = 0.0f64;
        for t in 0..sample_count {
            let (a, b, c) = mesh.triangle_vertices(t);
            sum += (b - a).length() as f64;
            sum += (c - b).length() as f64;
            sum += (a - c).length() as f64;
        }
        sum / (sample_count as f64 * 3.0)
    };
    let expected_area_sq = 0.1875 * mean_edge_length * mean_edge_length;
    let degenerate_threshold = 1e-8 * expected_area_sq;

    #[cfg(feature = "parallel")]
    let metrics: Vec<TriangleMetrics> = {
        use rayon::prelude::*;
        (0..triangle_count)
            .into_par_iter()
            .map(|t| triangle_metrics(mesh, t))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let metrics: Vec<TriangleMetrics> = (0..triangle_count).map(|t| triangle_metrics(mesh, t)).collect();

    let mut sorted_areas: Vec<f64> = metrics.iter().map(|m| m.area).collect();
    sorted_areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let median_area = if sorted_areas.len() % 2 == 0 {
        let mid = sorted_areas.len() / 2;
        (sorted_areas[mid - 1] + sorted_areas[mid]) / 2.0
    } else {
        sorted_areas[sorted_areas.len() / 2]
    };

    let mut degenerate_count = 0usize;
    let mut tiny_count = 0usize;
    let mut needle_count = 0usize;
    let mut edge_length_samples = Vec::with_capacity(triangle_count * 3);
    let mut aspect_ratio_samples = Vec::with_capacity(triangle_count);

    for m in &metrics {
        let area = m.area;
        edge_length_samples.push(m.edges[0]);
        edge_length_samples.push(m.edges[1]);
        edge_length_samples.push(m.edges[2]);

        if m.aspect_ratio.is_finite() {
            aspect_ratio_samples.push(m.aspect_ratio);
        }
        if m.aspect_ratio > 10.0 {
            needle_count += 1;
        }

        if 4.0 * area * area < degenerate_threshold {
            degenerate_count += 1;
        }
        if area > 0.0 && area < 0.01 * median_area {
            tiny_count += 1;
        }
    }

    QualityResult {
        degenerate_count,
        tiny_count,
        needle_count,
        edge_length_stats: DistributionStats::compute(&mut edge_length_samples),
        aspect_ratio_stats: DistributionStats::compute(&mut aspect_ratio_samples),
    }
}
