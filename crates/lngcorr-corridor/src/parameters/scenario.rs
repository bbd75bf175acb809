//! Fully-resolved calculator input.

use crate::boundary::Boundary;
use crate::reference::GwpHorizon;
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters of one corridor scenario, as handed to the calculator
///
/// Percentages are taken as supplied; the calculator clamps each to its
/// documented range before use. Built fresh from the scenario state on every
/// evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParameters {
    /// Which stages count towards the footprint
    /// default: WTW
    pub boundary: Boundary,

    /// Horizon of the methane GWP multiplier
    /// default: 100
    pub gwp_horizon: GwpHorizon,

    /// Effective sailing distance including any detour
    /// unit: nm
    /// default: 9000.0
    pub corridor_distance_nm: FloatValue,

    /// Unburned methane as a share of ship fuel mass
    /// unit: %
    /// range: 0 to 10
    /// default: 0.2
    pub methane_slip_pct: FloatValue,

    /// Ship fuel energy per 1000 nm as a share of delivered energy
    /// unit: % / 1000 nm
    /// range: 0 to 10
    /// default: 0.8
    pub shipping_energy_pct_per_1000nm: FloatValue,

    /// Methane leaked between wellhead and liquefaction, as a share of produced gas mass
    /// unit: %
    /// range: 0 to 20
    /// default: 1.5
    pub upstream_leak_pct: FloatValue,

    /// Gas processing energy as a share of delivered energy
    /// unit: %
    /// range: 0 to 30
    /// default: 2.0
    pub processing_energy_pct: FloatValue,

    /// Liquefaction energy as a share of delivered energy
    /// unit: %
    /// range: 0 to 40
    /// default: 8.0
    pub liquefaction_energy_pct: FloatValue,

    /// Regasification energy as a share of delivered energy
    /// unit: %
    /// range: 0 to 15
    /// default: 1.0
    pub regas_energy_pct: FloatValue,

    /// Net efficiency of the gas-fired plant at the receiving end
    /// unit: %
    /// range: 10 to 75
    /// default: 55.0
    pub plant_efficiency_pct: FloatValue,

    /// Emissions intensity of the coal-fired comparator
    /// unit: g CO2e / kWh
    /// default: 900.0
    pub coal_baseline_g_per_kwh: FloatValue,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            boundary: Boundary::WellToWake,
            gwp_horizon: GwpHorizon::Hundred,
            corridor_distance_nm: 9000.0,
            methane_slip_pct: 0.2,
            shipping_energy_pct_per_1000nm: 0.8,
            upstream_leak_pct: 1.5,
            processing_energy_pct: 2.0,
            liquefaction_energy_pct: 8.0,
            regas_energy_pct: 1.0,
            plant_efficiency_pct: 55.0,
            coal_baseline_g_per_kwh: 900.0,
        }
    }
}
