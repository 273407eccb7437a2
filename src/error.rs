//! Error handling for the mesh diagnostics engine.
//!
//! ## Design Philosophy
//!
//! The engine follows a strict **no-panic** policy:
//!
//! - All errors are returned as `Result<T, MeshError>`, never panicked
//! - Invalid input (ragged arrays, out-of-range indices, non-finite
//!   coordinates) produces an error describing the first offence; analysis
//!   never proceeds on data it cannot trust
//! - The triangle-count capacity guard is *not* an error: it produces a
//!   valid, sentinel-filled [`Diagnostics`](crate::diagnostics::Diagnostics)
//!   value instead (see [`crate::diagnostics::analyze`])
//!
//! This makes the engine safe to call from contexts where panics are
//! unacceptable (an editor, a batch pipeline, a background worker).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("positions array length {0} is not a multiple of 3")]
    RaggedPositions(usize),

    #[error("indices array length {0} is not a multiple of 3")]
    RaggedIndices(usize),

    #[error("triangle {triangle} references vertex index {index}, but the mesh only has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("vertex {vertex} has a non-finite coordinate ({axis}={value})")]
    NonFiniteCoordinate {
        vertex: usize,
        axis: &'static str,
        value: f32,
    },
}

pub type Result<T> = std::result::Result<T, MeshError>;
