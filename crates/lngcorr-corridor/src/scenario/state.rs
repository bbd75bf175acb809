use super::preset::PresetSelection;
use crate::boundary::Boundary;
use crate::reference::{default_corridor, default_engine, GwpHorizon};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Slider values the user has set; `None` inherits from the layers below
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_leak_pct: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methane_slip_pct: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_efficiency_pct: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coal_baseline_g_per_kwh: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detour_pct: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_rate_per_1000nm: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquefaction_pct: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_pct: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regas_pct: Option<FloatValue>,
}

/// Everything the user controls for one scenario slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioState {
    pub boundary: Boundary,
    pub gwp_horizon: GwpHorizon,
    pub corridor_id: String,
    pub engine_id: String,
    pub preset: PresetSelection,
    pub sliders: SliderState,
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self {
            boundary: Boundary::WellToWake,
            gwp_horizon: GwpHorizon::Hundred,
            corridor_id: default_corridor().id.clone(),
            engine_id: default_engine().id.clone(),
            preset: PresetSelection::default(),
            sliders: SliderState::default(),
        }
    }
}

impl ScenarioState {
    /// Default state of slot B: identical to A but at GWP20, so the two differ out of the box
    pub fn default_b() -> Self {
        Self {
            gwp_horizon: GwpHorizon::Twenty,
            ..Self::default()
        }
    }
}
