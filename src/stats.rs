//! Bounding volumes and distribution summaries shared across passes.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box plus its diagonal length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
    pub size: [f32; 3],
    pub diagonal: f32,
}

impl BoundingBox {
    pub fn from_min_max(min: glam::Vec3, max: glam::Vec3) -> Self {
        let size = max - min;
        Self {
            min: min.to_array(),
            max: max.to_array(),
            size: size.to_array(),
            diagonal: size.length(),
        }
    }
}

/// `{min, max, mean, median, stdDev}` of a non-empty sequence of reals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl DistributionStats {
    /// Returns `None` for an empty sample, matching the spec's "absent when
    /// the corresponding inputs are empty" rule for optional stat blocks.
    pub fn compute(samples: &mut [f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = samples.len();
        let min = samples[0];
        let max = samples[n - 1];
        let median = if n % 2 == 0 {
            (samples[n / 2 - 1] + samples[n / 2]) / 2.0
        } else {
            samples[n / 2]
        };

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

        Some(Self {
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}
