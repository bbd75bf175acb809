use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Scenario values that come from neither the engine profile nor a preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineDefaults {
    /// Emissions intensity of the coal-fired comparator
    /// unit: g CO2e / kWh
    /// default: 900.0
    pub coal_baseline_g_per_kwh: FloatValue,

    /// Extra sailing distance relative to the nominal corridor
    /// unit: %
    /// default: 0.0
    pub detour_pct: FloatValue,
}

impl Default for BaselineDefaults {
    fn default() -> Self {
        Self {
            coal_baseline_g_per_kwh: 900.0,
            detour_pct: 0.0,
        }
    }
}
