//! # mesh-diagnostics
//!
//! A deterministic, synchronous analysis engine for indexed triangle meshes.
//!
//! Given a flat array of vertex positions and a flat array of triangle
//! indices, [`analyze`] builds the edge-face topology, runs fourteen
//! independent passes over it, and returns a [`Diagnostics`] record
//! (topology counters, degenerate/needle/tiny triangle counts, duplicate
//! vertices, self-intersections, T-junctions, thin walls, coincident faces,
//! and the distributional summaries behind them) plus an [`Overlay`] of the
//! coordinates a viewer would highlight.
//!
//! ## Quick start
//!
//! ```
//! use mesh_diagnostics::analyze;
//!
//! // A single triangle.
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let indices = [0u32, 1, 2];
//!
//! let result = analyze(&positions, &indices)?;
//! assert_eq!(result.diagnostics.triangle_count, 1);
//! assert_eq!(result.diagnostics.boundary_edge_count, 3);
//! # Ok::<(), mesh_diagnostics::MeshError>(())
//! ```
//!
//! ## Feature flags
//!
//! By default the engine runs single-threaded (`default = []`). The
//! `parallel` feature turns on Rayon for the embarrassingly-parallel
//! per-triangle scans (bounding volume, triangle quality); passes that carry
//! shared mutable state (union-find, spatial hashes, link-graph BFS) are
//! unaffected by this feature and always run single-threaded.
//!
//! ## Design principles
//!
//! - **No panics.** All errors are returned as `Result<T, MeshError>`;
//!   invalid input is rejected at construction, not partway through a pass.
//! - **Pure function.** The engine holds no global state and borrows its
//!   inputs read-only; calling it twice on the same input produces
//!   bit-identical output.
//! - **One capacity limit.** Meshes above the triangle-count cap (see
//!   [`AnalysisOptions::max_triangle_count`]) are not an error: `analyze`
//!   returns a valid, sentinel-filled report instead of walking a mesh that
//!   would overrun the engine's internal map-size budget.

pub mod diagnostics;
pub mod error;
pub mod mesh;
pub mod options;
pub mod spatial_hash;
pub mod stats;

pub use diagnostics::{analyze, analyze_with_options, AnalysisResult, Diagnostics, Overlay};
pub use error::{MeshError, Result};
pub use mesh::MeshView;
pub use options::AnalysisOptions;
