//! Tunable thresholds for the analysis passes.
//!
//! Every field defaults to the constant the specification fixes; passing
//! [`AnalysisOptions::default()`] reproduces the literal spec's behavior
//! exactly. Callers that need a looser or tighter pass (e.g. treating a
//! millimeter-scale mesh's thin walls more conservatively) override
//! individual fields rather than forking the detection logic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Fraction of the bounding-box diagonal used as the thin-wall proximity
    /// threshold (§4.10). Echoed back as `thinWallThreshold` in the report.
    pub thin_wall_fraction: f64,
    /// Aspect ratio above which a triangle is classified a needle (§4.4).
    pub needle_aspect_ratio: f64,
    /// Dihedral angle below which an edge is classified sharp, in degrees (§4.7).
    pub sharp_angle_deg: f64,
    /// Dihedral angle above which an edge is classified coplanar, in degrees (§4.7).
    pub coplanar_angle_deg: f64,
    /// Absolute distance below which two vertices are considered coincident (§4.5).
    pub duplicate_vertex_epsilon: f64,
    /// Triangle-count capacity guard (§4.1). Above this the engine short-circuits.
    pub max_triangle_count: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            thin_wall_fraction: 0.005,
            needle_aspect_ratio: 10.0,
            sharp_angle_deg: 30.0,
            coplanar_angle_deg: 170.0,
            duplicate_vertex_epsilon: 1e-6,
            max_triangle_count: 5_592_405,
        }
    }
}
