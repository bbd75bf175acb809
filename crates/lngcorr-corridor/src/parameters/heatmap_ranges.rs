//! Sweep ranges of the break-even heatmap.

use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::units::lerp;
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// A uniformly sampled parameter range, endpoints included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub min: FloatValue,
    pub max: FloatValue,
    pub steps: usize,
}

impl AxisSpec {
    /// Create an axis, rejecting fewer than two samples
    pub fn new(axis: &str, min: FloatValue, max: FloatValue, steps: usize) -> CorridorResult<Self> {
        let axis_spec = Self { min, max, steps };
        axis_spec.validate(axis)?;
        Ok(axis_spec)
    }

    /// Check the axis can be sampled; `axis` names it in the error
    pub fn validate(&self, axis: &str) -> CorridorResult<()> {
        if self.steps < 2 {
            return Err(CorridorError::InvalidAxis {
                axis: axis.to_string(),
                steps: self.steps,
            });
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CorridorError::invalid(
                "axis range",
                format!("{axis}: {} to {}", self.min, self.max),
            ));
        }
        Ok(())
    }

    /// Value of sample `index`, `min` at 0 and `max` at `steps - 1`
    pub fn value_at(&self, index: usize) -> FloatValue {
        lerp(
            self.min,
            self.max,
            index as FloatValue / (self.steps - 1) as FloatValue,
        )
    }

    /// Position of `value` along the axis as a fraction in [0, 1]
    pub fn normalise(&self, value: FloatValue) -> FloatValue {
        let span = self.max - self.min;
        let span = if span == 0.0 { 1.0 } else { span };
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// All sample values in order
    pub fn values(&self) -> impl Iterator<Item = FloatValue> + '_ {
        (0..self.steps).map(|i| self.value_at(i))
    }
}

/// Ranges swept by the heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapRanges {
    /// Upstream leakage, mapped to grid columns
    /// unit: %
    /// default: 0 to 6 in 61 steps
    pub leakage_pct: AxisSpec,

    /// Methane slip, mapped to grid rows
    /// unit: %
    /// default: 0 to 3 in 61 steps
    pub slip_pct: AxisSpec,
}

impl Default for HeatmapRanges {
    fn default() -> Self {
        Self {
            leakage_pct: AxisSpec {
                min: 0.0,
                max: 6.0,
                steps: 61,
            },
            slip_pct: AxisSpec {
                min: 0.0,
                max: 3.0,
                steps: 61,
            },
        }
    }
}
