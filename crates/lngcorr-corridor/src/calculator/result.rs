use super::stage::{Stage, StageBreakdownEntry};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Footprint of one scenario per scenario unit of delivered fuel
///
/// Derived from scratch on every evaluation; nothing in it is updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Sum of every stage's CO2 and CH4-as-CO2e
    /// unit: g CO2e
    pub total_co2e_g: FloatValue,
    /// One entry per stage in [`Stage::ALL`] order, zeroed when outside the boundary
    pub breakdown: [StageBreakdownEntry; 7],
    /// Share of the total caused by the voyage
    /// unit: %
    pub shipping_share_pct: FloatValue,
    /// Intensity per kWh of electricity; only present for well-to-wire
    /// unit: g CO2e / kWh
    pub g_per_kwh: Option<FloatValue>,
    /// Intensity minus the coal baseline; only present for well-to-wire
    /// unit: g CO2e / kWh
    pub delta_vs_coal_g_per_kwh: Option<FloatValue>,
    pub unit_hint: String,
}

impl ScenarioResult {
    /// Breakdown entry of `stage`
    pub fn stage(&self, stage: Stage) -> &StageBreakdownEntry {
        // Entries are built from Stage::ALL, so the position is the discriminant
        &self.breakdown[stage as usize]
    }

    /// True when the scenario's intensity is below the coal comparator
    pub fn beats_coal(&self) -> Option<bool> {
        self.delta_vs_coal_g_per_kwh.map(|delta| delta < 0.0)
    }
}
