//! The borrowed mesh view the engine operates over.
//!
//! A mesh is `(positions, indices)`: a flat run of 3D vertex coordinates and
//! a flat run of triangle vertex indices. `MeshView` never copies either
//! array; it borrows them for the lifetime of one [`analyze`](crate::diagnostics::analyze)
//! call and exposes typed accessors over the raw floats and indices.

use crate::error::{MeshError, Result};
use glam::Vec3;

/// A triangle's three vertex indices, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub v0: u32,
    pub v1: u32,
    pub v2: u32,
}

impl Triangle {
    pub fn indices(&self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// The triangle's three undirected edges, in traversal order.
    pub fn edges(&self) -> [(u32, u32); 3] {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
    }
}

/// A read-only view over a caller-owned `(positions, indices)` pair.
///
/// Construction validates the contract described in the crate's data model:
/// array lengths are multiples of 3, every index is in range, and every
/// coordinate is finite. Construction fails fast on the first offence found
/// rather than attempting a partial analysis.
pub struct MeshView<'a> {
    positions: &'a [f32],
    indices: &'a [u32],
}

impl<'a> MeshView<'a> {
    pub fn new(positions: &'a [f32], indices: &'a [u32]) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::RaggedPositions(positions.len()));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices(indices.len()));
        }

        let vertex_count = positions.len() / 3;

        for (v, chunk) in positions.chunks_exact(3).enumerate() {
            for (axis, &value) in ["x", "y", "z"].iter().zip(chunk) {
                if !value.is_finite() {
                    return Err(MeshError::NonFiniteCoordinate {
                        vertex: v,
                        axis,
                        value,
                    });
                }
            }
        }

        for (t, tri) in indices.chunks_exact(3).enumerate() {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfRange {
                        triangle: t,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self { positions, indices })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex(&self, v: u32) -> Vec3 {
        let base = v as usize * 3;
        Vec3::new(
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        )
    }

    pub fn triangle(&self, t: usize) -> Triangle {
        let base = t * 3;
        Triangle {
            v0: self.indices[base],
            v1: self.indices[base + 1],
            v2: self.indices[base + 2],
        }
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(move |t| self.triangle(t))
    }

    pub fn triangle_vertices(&self, t: usize) -> (Vec3, Vec3, Vec3) {
        let tri = self.triangle(t);
        (self.vertex(tri.v0), self.vertex(tri.v1), self.vertex(tri.v2))
    }

    /// Unnormalized `(v1-v0) x (v2-v0)`. Zero for degenerate triangles.
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let (a, b, c) = self.triangle_vertices(t);
        (b - a).cross(c - a)
    }

    pub fn triangle_area(&self, t: usize) -> f64 {
        0.5 * self.face_normal(t).length() as f64
    }

    pub fn triangle_centroid(&self, t: usize) -> Vec3 {
        let (a, b, c) = self.triangle_vertices(t);
        (a + b + c) / 3.0
    }
}

/// Canonicalize an undirected edge as `(min, max)`.
pub fn canonical_edge(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}
