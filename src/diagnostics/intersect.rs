//! P10: self-intersection detection. Uniform spatial hash for the broad
//! phase, a Moller-style triangle-triangle test for the narrow phase.

use crate::mesh::MeshView;
use crate::spatial_hash::SpatialHash;
use crate::stats::BoundingBox;
use glam::Vec3;

const PLANE_TOLERANCE: f64 = 1e-8;
const DIRECTION_TOLERANCE: f64 = 1e-10;

/// Intersecting triangle-index pairs, `t1 < t2`.
pub fn detect(mesh: &MeshView, bounding_box: Option<&BoundingBox>) -> Vec<(usize, usize)> {
    let triangle_count = mesh.triangle_count();
    if triangle_count == 0 {
        return Vec::new();
    }

    let diagonal = bounding_box.map_or(0.0, |b| b.diagonal);
    let mean_edge_length = diagonal / (triangle_count as f64 / 2.0).sqrt();
    let cell_size = (2.0 * mean_edge_length).max(1e-6);

    let aabbs: Vec<(Vec3, Vec3)> = (0..triangle_count).map(|t| triangle_aabb(mesh, t)).collect();
    let mut grid: SpatialHash<usize> = SpatialHash::new(cell_size);
    for (t, &(min, max)) in aabbs.iter().enumerate() {
        grid.insert_aabb(min, max, t);
    }

    let mut pairs = Vec::new();
    for t1 in 0..triangle_count {
        let (min, max) = aabbs[t1];
        let mut candidates: Vec<usize> = grid
            .query_aabb(min, max)
            .into_iter()
            .filter(|&t2| t2 > t1)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        for t2 in candidates {
            if shares_two_or_more_vertices(mesh, t1, t2) {
                continue;
            }
            if triangles_intersect(mesh, t1, t2) {
                pairs.push((t1, t2));
            }
        }
    }
    pairs
}

fn triangle_aabb(mesh: &MeshView, t: usize) -> (Vec3, Vec3) {
    let (a, b, c) = mesh.triangle_vertices(t);
    (a.min(b).min(c), a.max(b).max(c))
}

fn shares_two_or_more_vertices(mesh: &MeshView, t1: usize, t2: usize) -> bool {
    let v1 = mesh.triangle(t1).indices();
    let v2 = mesh.triangle(t2).indices();
    v1.iter().filter(|i| v2.contains(i)).count() >= 2
}

fn signed_distance(normal: Vec3, plane_point: Vec3, p: Vec3) -> f64 {
    normal.dot(p - plane_point) as f64
}

fn all_same_sign(d: &[f64; 3]) -> bool {
    (d[0] > PLANE_TOLERANCE && d[1] > PLANE_TOLERANCE && d[2] > PLANE_TOLERANCE)
        || (d[0] < -PLANE_TOLERANCE && d[1] < -PLANE_TOLERANCE && d[2] < -PLANE_TOLERANCE)
}

fn max_abs_axis(v: Vec3) -> usize {
    let abs = [v.x.abs(), v.y.abs(), v.z.abs()];
    if abs[0] >= abs[1] && abs[0] >= abs[2] {
        0
    } else if abs[1] >= abs[2] {
        1
    } else {
        2
    }
}

fn axis_component(v: Vec3, axis: usize) -> f64 {
    match axis {
        0 => v.x as f64,
        1 => v.y as f64,
        _ => v.z as f64,
    }
}

fn triangles_intersect(mesh: &MeshView, t1: usize, t2: usize) -> bool {
    let (a0, a1, a2) = mesh.triangle_vertices(t1);
    let (b0, b1, b2) = mesh.triangle_vertices(t2);
    let n1 = mesh.face_normal(t1);
    let n2 = mesh.face_normal(t2);

    // Distances of t2's vertices from t1's plane, and vice versa.
    let d1 = [
        signed_distance(n1, a0, b0),
        signed_distance(n1, a0, b1),
        signed_distance(n1, a0, b2),
    ];
    if all_same_sign(&d1) {
        return false;
    }

    let d2 = [
        signed_distance(n2, b0, a0),
        signed_distance(n2, b0, a1),
        signed_distance(n2, b0, a2),
    ];
    if all_same_sign(&d2) {
        return false;
    }

    let direction = n1.cross(n2);
    if (direction.length() as f64) < DIRECTION_TOLERANCE {
        return coplanar_overlap(n1, [a0, a1, a2], [b0, b1, b2]);
    }

    let axis = max_abs_axis(direction);
    let interval_t2 = crossing_interval([b0, b1, b2], &d1, axis);
    let interval_t1 = crossing_interval([a0, a1, a2], &d2, axis);

    match (interval_t1, interval_t2) {
        (Some((lo1, hi1)), Some((lo2, hi2))) => {
            lo1 <= hi2 + PLANE_TOLERANCE && lo2 <= hi1 + PLANE_TOLERANCE
        }
        _ => false,
    }
}

/// Where a triangle (given its vertices and their signed distances to the
/// other triangle's plane) crosses that plane, projected onto `axis`.
fn crossing_interval(vertices: [Vec3; 3], distances: &[f64; 3], axis: usize) -> Option<(f64, f64)> {
    let edges = [(0usize, 1usize), (1, 2), (2, 0)];
    let mut projections = Vec::with_capacity(2);
    for (i, j) in edges {
        let di = distances[i];
        let dj = distances[j];
        if di.abs() <= PLANE_TOLERANCE {
            projections.push(axis_component(vertices[i], axis));
        }
        if di * dj < 0.0 {
            let t = di / (di - dj);
            let point = vertices[i].lerp(vertices[j], t as f32);
            projections.push(axis_component(point, axis));
        }
    }
    if projections.is_empty() {
        return None;
    }
    let lo = projections.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = projections.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some((lo, hi))
}

/// Coplanar fallback: project onto the 2D plane perpendicular to the
/// triangles' shared normal's dominant axis, then test for edge crossings
/// or containment.
fn coplanar_overlap(normal: Vec3, tri1: [Vec3; 3], tri2: [Vec3; 3]) -> bool {
    let drop = max_abs_axis(normal);
    let (u, v) = match drop {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let project = |p: Vec3| (axis_component(p, u), axis_component(p, v));

    let p1: Vec<(f64, f64)> = tri1.iter().map(|&p| project(p)).collect();
    let p2: Vec<(f64, f64)> = tri2.iter().map(|&p| project(p)).collect();

    for i in 0..3 {
        for j in 0..3 {
            if segments_cross(p1[i], p1[(i + 1) % 3], p2[j], p2[(j + 1) % 3]) {
                return true;
            }
        }
    }

    p1.iter().any(|&p| point_strictly_inside(p, &p2))
        || p2.iter().any(|&p| point_strictly_inside(p, &p1))
}

fn cross2(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

fn segments_cross(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64), p4: (f64, f64)) -> bool {
    let d1 = cross2(p3, p4, p1);
    let d2 = cross2(p3, p4, p2);
    let d3 = cross2(p1, p2, p3);
    let d4 = cross2(p1, p2, p4);
    if d1.abs() < PLANE_TOLERANCE
        || d2.abs() < PLANE_TOLERANCE
        || d3.abs() < PLANE_TOLERANCE
        || d4.abs() < PLANE_TOLERANCE
    {
        return false;
    }
    (d1 > 0.0) != (d2 > 0.0) && (d3 > 0.0) != (d4 > 0.0)
}

fn point_strictly_inside(p: (f64, f64), tri: &[(f64, f64)]) -> bool {
    let (ax, ay) = tri[0];
    let (bx, by) = tri[1];
    let (cx, cy) = tri[2];
    let denom = (by - cy) * (ax - cx) + (cx - bx) * (ay - cy);
    if denom.abs() < 1e-12 {
        return false;
    }
    let u = ((by - cy) * (p.0 - cx) + (cx - bx) * (p.1 - cy)) / denom;
    let v = ((cy - ay) * (p.0 - cx) + (ax - cx) * (p.1 - cy)) / denom;
    let w = 1.0 - u - v;
    u >= -PLANE_TOLERANCE && v >= -PLANE_TOLERANCE && w > PLANE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BoundingBox;

    #[test]
    fn crossing_triangles_intersect() {
        let positions = [
            -1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 1.0,
            0.5, 0.0,
        ];
        let indices = [0u32, 1, 2, 3, 4, 5];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let pairs = detect(&mesh, Some(&bbox));

        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn disjoint_triangles_do_not_intersect() {
        let positions = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 10.0, 10.0, 10.0, 11.0, 10.0, 10.0, 10.0,
            11.0, 10.0,
        ];
        let indices = [0u32, 1, 2, 3, 4, 5];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(11.0, 11.0, 10.0));
        let pairs = detect(&mesh, Some(&bbox));

        assert!(pairs.is_empty());
    }

    #[test]
    fn adjacent_triangles_sharing_an_edge_are_not_flagged() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0u32, 1, 2, 0, 2, 3];
        let mesh = MeshView::new(&positions, &indices).unwrap();
        let bbox = BoundingBox::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let pairs = detect(&mesh, Some(&bbox));

        assert!(pairs.is_empty());
    }
}
