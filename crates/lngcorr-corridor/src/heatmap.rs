//! Break-even heatmap
//!
//! Sweeps upstream leakage (columns) and methane slip (rows) over uniform
//! axes and records, for every cell, how far the well-to-wire intensity sits
//! above (positive) or below (negative) the coal baseline.
//!
//! The sweep always runs at [`Boundary::WellToWire`], whatever boundary the
//! anchor scenario uses, because the coal comparison only exists per kWh.
//!
//! Cells share nothing, so they are evaluated in parallel with rayon; the
//! result does not depend on evaluation order.

use crate::boundary::Boundary;
use crate::calculator::StageEmissionCalculator;
use crate::parameters::{AxisSpec, HeatmapRanges, ScenarioParameters};
use crate::reference::GwpFactor;
use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fraction of the largest |Δ| used as the colour range, for contrast
const COLOUR_RANGE_SCALE: FloatValue = 0.9;

/// Sensitivity surface of Δ vs coal over leakage × slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapGrid {
    /// Column axis
    pub leakage: AxisSpec,
    /// Row axis
    pub slip: AxisSpec,
    /// `values[[j, i]]` is Δ vs coal at slip sample `j` and leakage sample `i`
    /// unit: g CO2e / kWh
    pub values: Array2<FloatValue>,
    /// unit: g CO2e / kWh
    pub coal_baseline_g_per_kwh: FloatValue,
    pub gwp_label: String,
}

/// Normalised position of a point on the surface, (0, 0) at both axis minima
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub x: FloatValue,
    pub y: FloatValue,
}

/// Symmetric value range for a diverging colour scale centred on break-even
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColourRange {
    pub min: FloatValue,
    pub max: FloatValue,
}

impl HeatmapGrid {
    /// Generate the surface around `anchor`
    ///
    /// Every parameter except leakage, slip and boundary is taken from `anchor`.
    ///
    /// # Errors
    ///
    /// - [`CorridorError::InvalidAxis`] if either axis has fewer than 2 steps,
    ///   or the grid has more cells than can be addressed
    /// - [`CorridorError::DegenerateModel`] if the anchor's energy penalties
    ///   leave no delivered energy (the penalties do not vary across the grid)
    pub fn generate(
        calculator: &StageEmissionCalculator,
        anchor: &ScenarioParameters,
        gwp: &GwpFactor,
        ranges: &HeatmapRanges,
    ) -> CorridorResult<Self> {
        let leakage = ranges.leakage_pct;
        let slip = ranges.slip_pct;
        leakage.validate("leakage")?;
        slip.validate("slip")?;

        let (rows, cols) = (slip.steps, leakage.steps);
        let cells = rows.checked_mul(cols).ok_or_else(|| CorridorError::InvalidAxis {
            axis: format!("leakage × slip ({rows} rows)"),
            steps: cols,
        })?;
        let values = (0..cells)
            .into_par_iter()
            .map(|index| {
                let (j, i) = (index / cols, index % cols);
                cell_value(
                    calculator,
                    anchor,
                    gwp,
                    leakage.value_at(i),
                    slip.value_at(j),
                )
            })
            .collect::<CorridorResult<Vec<FloatValue>>>()?;

        let values = Array2::from_shape_vec((rows, cols), values)
            .map_err(|e| CorridorError::Error(e.to_string()))?;

        debug!(
            rows,
            cols,
            gwp = %gwp.label,
            coal_baseline = anchor.coal_baseline_g_per_kwh,
            "Generated break-even heatmap"
        );

        Ok(Self {
            leakage,
            slip,
            values,
            coal_baseline_g_per_kwh: anchor.coal_baseline_g_per_kwh,
            gwp_label: gwp.label.clone(),
        })
    }

    /// Δ vs coal at slip sample `row` and leakage sample `col`
    pub fn cell(&self, row: usize, col: usize) -> Option<FloatValue> {
        self.values.get((row, col)).copied()
    }

    /// Values as nested rows, one row per slip sample
    pub fn to_rows(&self) -> Vec<Vec<FloatValue>> {
        self.values.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Symmetric range around zero for colouring, ±90 % of the largest |Δ|
    pub fn colour_range(&self) -> ColourRange {
        let abs_max = self
            .values
            .iter()
            .fold(0.0, |acc: FloatValue, v| acc.max(v.abs()));
        let scale = abs_max * COLOUR_RANGE_SCALE;
        ColourRange {
            min: -scale,
            max: scale,
        }
    }

    /// Where a scenario with the given leakage and slip sits on the surface
    ///
    /// Points outside the swept ranges are pinned to the nearest edge.
    pub fn marker_position(&self, leakage_pct: FloatValue, slip_pct: FloatValue) -> MarkerPosition {
        MarkerPosition {
            x: self.leakage.normalise(leakage_pct),
            y: self.slip.normalise(slip_pct),
        }
    }

    /// Number of cells where the corridor beats the coal baseline
    pub fn cells_below_coal(&self) -> usize {
        self.values.iter().filter(|v| **v < 0.0).count()
    }
}

/// Δ vs coal for one cell, by the same calculator path as a standalone evaluation
pub fn cell_value(
    calculator: &StageEmissionCalculator,
    anchor: &ScenarioParameters,
    gwp: &GwpFactor,
    leakage_pct: FloatValue,
    slip_pct: FloatValue,
) -> CorridorResult<FloatValue> {
    let params = ScenarioParameters {
        boundary: Boundary::WellToWire,
        upstream_leak_pct: leakage_pct,
        methane_slip_pct: slip_pct,
        ..anchor.clone()
    };
    let result = calculator.evaluate(&params, gwp)?;
    result
        .delta_vs_coal_g_per_kwh
        .ok_or_else(|| CorridorError::Error("well-to-wire evaluation produced no Δ vs coal".into()))
}
