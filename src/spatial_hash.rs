//! A uniform spatial hash grid shared by every broad-phase pass.
//!
//! Five passes (duplicate vertices, self-intersection, T-junctions, thin
//! walls, coincident faces) each need a cheap way to find "things near this
//! point" without an `O(n^2)` scan. Rather than give each pass its own
//! bespoke grid, they all drive the same `(cell-size, insert, query)`
//! primitive, exactly as the design notes prescribe: the grid type is a
//! parameter, the passes only differ in what they insert and how far they
//! look.

use glam::Vec3;
use std::collections::HashMap;

pub type Cell = (i64, i64, i64);

pub struct SpatialHash<T> {
    cell_size: f64,
    cells: HashMap<Cell, Vec<T>>,
}

impl<T: Copy> SpatialHash<T> {
    pub fn new(cell_size: f64) -> Self {
        // A cell size of zero or non-finite would make every point hash to
        // the same bucket (or panic on the floor below); guard against the
        // degenerate single-point / zero-diagonal mesh case.
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    pub fn cell_of(&self, p: Vec3) -> Cell {
        (
            (p.x as f64 / self.cell_size).floor() as i64,
            (p.y as f64 / self.cell_size).floor() as i64,
            (p.z as f64 / self.cell_size).floor() as i64,
        )
    }

    /// Insert a value keyed by a single point (its owning cell only).
    pub fn insert(&mut self, p: Vec3, value: T) {
        self.cells.entry(self.cell_of(p)).or_default().push(value);
    }

    /// Insert a value into every cell an AABB overlaps.
    pub fn insert_aabb(&mut self, min: Vec3, max: Vec3, value: T) {
        let lo = self.cell_of(min);
        let hi = self.cell_of(max);
        for x in lo.0..=hi.0 {
            for y in lo.1..=hi.1 {
                for z in lo.2..=hi.2 {
                    self.cells.entry((x, y, z)).or_default().push(value);
                }
            }
        }
    }

    /// Contents of exactly the cell containing `p` (no neighbor cells).
    pub fn own_cell(&self, p: Vec3) -> &[T] {
        self.cells
            .get(&self.cell_of(p))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Contents of the cell containing `p` and its 26 neighbors.
    pub fn neighborhood(&self, p: Vec3) -> Vec<T> {
        let center = self.cell_of(p);
        let mut out = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cell = (center.0 + dx, center.1 + dy, center.2 + dz);
                    if let Some(values) = self.cells.get(&cell) {
                        out.extend_from_slice(values);
                    }
                }
            }
        }
        out
    }

    /// Every value in a cell an AABB overlaps. Items inserted via
    /// [`insert_aabb`](Self::insert_aabb) that span multiple cells can
    /// appear more than once; callers dedup (typically by `t1 < t2`).
    pub fn query_aabb(&self, min: Vec3, max: Vec3) -> Vec<T> {
        let lo = self.cell_of(min);
        let hi = self.cell_of(max);
        let mut out = Vec::new();
        for x in lo.0..=hi.0 {
            for y in lo.1..=hi.1 {
                for z in lo.2..=hi.2 {
                    if let Some(values) = self.cells.get(&(x, y, z)) {
                        out.extend_from_slice(values);
                    }
                }
            }
        }
        out
    }
}
