//! Stage Emission Calculator
//!
//! Computes the full-chain footprint of delivering one scenario unit
//! ([`DELIVERED_ENERGY_MJ`]) of fuel energy through an LNG corridor.
//!
//! # What This Calculator Does
//!
//! 1. Expresses processing, liquefaction, regasification and shipping as
//!    energy penalties relative to delivered energy. The shipping penalty is
//!    $(d / 1000) \cdot r$ for distance $d$ (nm) and rate $r$ (% per 1000 nm).
//!
//! 2. Grosses delivered energy up to the energy that has to be produced at the
//!    wellhead:
//!    $$E_{produced} = \frac{E_{delivered}}{1 - P/100}$$
//!    where $P$ is the sum of the penalties.
//!
//! 3. Converts stage energies to CO2 with configurable carbon intensities, and
//!    produced gas and ship fuel to methane mass with the fuel LHV.
//!
//! 4. Charges upstream leakage against produced gas mass and methane slip
//!    against ship fuel mass, weighted by the active GWP multiplier.
//!
//! 5. Zeroes stages outside the boundary, sums, and for well-to-wire divides
//!    by the electricity generated at the receiving plant.
//!
//! # Clamping
//!
//! Every percentage is clamped to its documented range here, whatever was
//! checked upstream. A penalty sum of 100 % or more leaves nothing delivered
//! and is reported as [`CorridorError::DegenerateModel`]; no NaN or infinity
//! ever leaves this module.

mod result;
mod stage;

pub use result::ScenarioResult;
pub use stage::{Stage, StageBreakdownEntry};

use crate::boundary::Boundary;
use crate::parameters::{PhysicalConstants, ScenarioParameters};
use crate::reference::GwpFactor;
use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::units::{
    DELIVERED_ENERGY_MJ, G_PER_KG, LIQUEFACTION_ENERGY_PCT, METHANE_SLIP_PCT, MJ_PER_KWH,
    PLANT_EFFICIENCY_PCT, PROCESSING_ENERGY_PCT, REGAS_ENERGY_PCT, SHIPPING_ENERGY_PCT,
    SHIPPING_FACTOR, UPSTREAM_LEAK_PCT,
};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Clamped energy penalties of a scenario, all relative to delivered energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyPenalties {
    /// unit: %
    pub processing_pct: FloatValue,
    /// unit: %
    pub liquefaction_pct: FloatValue,
    /// unit: %
    pub regas_pct: FloatValue,
    /// unit: %
    pub shipping_pct: FloatValue,
}

impl EnergyPenalties {
    /// Clamp each penalty of `params` individually
    pub fn from_parameters(params: &ScenarioParameters) -> Self {
        let distance_factor = SHIPPING_FACTOR.clamp(params.corridor_distance_nm / 1000.0);
        let rate = SHIPPING_FACTOR.clamp(params.shipping_energy_pct_per_1000nm);

        Self {
            processing_pct: PROCESSING_ENERGY_PCT.clamp(params.processing_energy_pct),
            liquefaction_pct: LIQUEFACTION_ENERGY_PCT.clamp(params.liquefaction_energy_pct),
            regas_pct: REGAS_ENERGY_PCT.clamp(params.regas_energy_pct),
            shipping_pct: SHIPPING_ENERGY_PCT.clamp(distance_factor * rate),
        }
    }

    /// Sum of the clamped penalties
    /// unit: %
    pub fn total_pct(&self) -> FloatValue {
        self.processing_pct + self.liquefaction_pct + self.regas_pct + self.shipping_pct
    }

    /// Energy that must leave the wellhead for [`DELIVERED_ENERGY_MJ`] to arrive
    /// unit: MJ
    pub fn produced_energy_mj(&self) -> CorridorResult<FloatValue> {
        let total = self.total_pct();
        let produced = DELIVERED_ENERGY_MJ / (1.0 - total / 100.0);
        if total >= 100.0 || !produced.is_finite() {
            return Err(CorridorError::DegenerateModel {
                total_penalty_pct: total,
            });
        }
        Ok(produced)
    }

    /// Energy consumed by a stage with penalty `pct`
    /// unit: MJ
    fn stage_energy_mj(pct: FloatValue) -> FloatValue {
        pct / 100.0 * DELIVERED_ENERGY_MJ
    }
}

/// Closed-form stage emission model
///
/// Holds only the physical constants; each call to [`evaluate`](Self::evaluate)
/// is independent, so one calculator can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageEmissionCalculator {
    constants: PhysicalConstants,
}

impl StageEmissionCalculator {
    /// Create a calculator with default constants
    pub fn new() -> Self {
        Self::from_constants(PhysicalConstants::default())
    }

    pub fn from_constants(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Evaluate a scenario with the GWP preset of its own horizon
    pub fn evaluate_default_gwp(&self, params: &ScenarioParameters) -> CorridorResult<ScenarioResult> {
        self.evaluate(params, &params.gwp_horizon.factor())
    }

    /// Evaluate a scenario
    ///
    /// # Errors
    ///
    /// - [`CorridorError::InvalidParameter`] when the GWP multiplier is not
    ///   finite and positive
    /// - [`CorridorError::DegenerateModel`] when the clamped energy penalties sum
    ///   to 100 % or more, or when the result would otherwise be non-finite
    pub fn evaluate(
        &self,
        params: &ScenarioParameters,
        gwp: &GwpFactor,
    ) -> CorridorResult<ScenarioResult> {
        if !(gwp.ch4_multiplier.is_finite() && gwp.ch4_multiplier > 0.0) {
            return Err(CorridorError::invalid(
                "gwp multiplier",
                gwp.ch4_multiplier.to_string(),
            ));
        }
        let penalties = EnergyPenalties::from_parameters(params);
        let produced_mj = penalties.produced_energy_mj()?;

        let processing_mj = EnergyPenalties::stage_energy_mj(penalties.processing_pct);
        let liquefaction_mj = EnergyPenalties::stage_energy_mj(penalties.liquefaction_pct);
        let regas_mj = EnergyPenalties::stage_energy_mj(penalties.regas_pct);
        let shipping_mj = EnergyPenalties::stage_energy_mj(penalties.shipping_pct);

        let leak_pct = UPSTREAM_LEAK_PCT.clamp(params.upstream_leak_pct);
        let slip_pct = METHANE_SLIP_PCT.clamp(params.methane_slip_pct);

        let upstream_leak_kg = self.constants.ch4_mass_kg(produced_mj) * leak_pct / 100.0;
        let shipping_slip_kg = self.constants.ch4_mass_kg(shipping_mj) * slip_pct / 100.0;

        let process_intensity = self.constants.process_co2_g_per_mj;
        let combustion_intensity = self.constants.combustion_co2_g_per_mj;

        let emissions = |stage: Stage| -> (FloatValue, FloatValue) {
            match stage {
                Stage::UpstreamLeakage => (0.0, upstream_leak_kg * G_PER_KG * gwp.ch4_multiplier),
                Stage::Processing => (processing_mj * process_intensity, 0.0),
                Stage::Liquefaction => (liquefaction_mj * process_intensity, 0.0),
                Stage::ShippingCo2 => (shipping_mj * combustion_intensity, 0.0),
                Stage::ShippingSlip => (0.0, shipping_slip_kg * G_PER_KG * gwp.ch4_multiplier),
                Stage::Regasification => (regas_mj * process_intensity, 0.0),
                Stage::Combustion => (DELIVERED_ENERGY_MJ * combustion_intensity, 0.0),
            }
        };

        let breakdown = Stage::ALL.map(|stage| {
            if params.boundary.includes(stage) {
                let (co2_g, ch4_co2e_g) = emissions(stage);
                StageBreakdownEntry {
                    stage,
                    co2_g,
                    ch4_co2e_g,
                }
            } else {
                StageBreakdownEntry::excluded(stage)
            }
        });

        let total_co2e_g: FloatValue = breakdown.iter().map(StageBreakdownEntry::total_g).sum();
        let shipping_g: FloatValue = breakdown
            .iter()
            .filter(|entry| entry.stage.is_shipping())
            .map(StageBreakdownEntry::total_g)
            .sum();
        let shipping_share_pct = if total_co2e_g == 0.0 {
            0.0
        } else {
            shipping_g / total_co2e_g * 100.0
        };

        let (g_per_kwh, delta_vs_coal_g_per_kwh, unit_hint) = match params.boundary {
            Boundary::WellToWire => {
                let efficiency_pct = PLANT_EFFICIENCY_PCT.clamp(params.plant_efficiency_pct);
                let kwh = DELIVERED_ENERGY_MJ * (efficiency_pct / 100.0) / MJ_PER_KWH;
                let g_per_kwh = total_co2e_g / kwh;
                let delta = g_per_kwh - params.coal_baseline_g_per_kwh;
                (
                    Some(g_per_kwh),
                    Some(delta),
                    format!(
                        "Converted using plant efficiency ({efficiency_pct}%) → gCO₂e/kWh"
                    ),
                )
            }
            Boundary::TankToWake | Boundary::WellToWake => (
                None,
                None,
                "Scenario unit = 1,000 MJ delivered fuel energy".to_string(),
            ),
        };

        let finite = total_co2e_g.is_finite()
            && shipping_share_pct.is_finite()
            && delta_vs_coal_g_per_kwh.map_or(true, FloatValue::is_finite);
        if !finite {
            return Err(CorridorError::DegenerateModel {
                total_penalty_pct: penalties.total_pct(),
            });
        }

        debug!(
            boundary = %params.boundary,
            gwp = %gwp.label,
            total_penalty_pct = penalties.total_pct(),
            total_co2e_g,
            "Evaluated scenario"
        );

        Ok(ScenarioResult {
            total_co2e_g,
            breakdown,
            shipping_share_pct,
            g_per_kwh,
            delta_vs_coal_g_per_kwh,
            unit_hint,
        })
    }
}
