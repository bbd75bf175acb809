use super::preset::PresetSelection;
use super::state::ScenarioState;
use crate::calculator::{ScenarioResult, StageEmissionCalculator};
use crate::parameters::{BaselineDefaults, ScenarioParameters};
use crate::reference::{corridor, engine, Corridor, EngineProfile, GwpFactor};
use lngcorr_core::errors::CorridorResult;
use lngcorr_core::units::DETOUR_PCT;
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Sailing distance including a detour, which is clamped to its range
/// unit: nm
pub fn effective_distance_nm(corridor_nm: FloatValue, detour_pct: FloatValue) -> FloatValue {
    corridor_nm * (1.0 + DETOUR_PCT.clamp(detour_pct) / 100.0)
}

/// A scenario state with every layer applied, ready for the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScenario {
    pub parameters: ScenarioParameters,
    pub corridor: Corridor,
    pub engine: EngineProfile,
    pub gwp: GwpFactor,
    pub preset: PresetSelection,
    /// unit: nm
    pub effective_distance_nm: FloatValue,
}

impl ScenarioState {
    /// Merge reference defaults, the preset and set sliders into calculator input
    ///
    /// # Errors
    ///
    /// [`CorridorError::InvalidParameter`](lngcorr_core::errors::CorridorError) if
    /// the corridor or engine id is not in the reference tables.
    pub fn resolve(&self, baseline: &BaselineDefaults) -> CorridorResult<ResolvedScenario> {
        let corridor = corridor(&self.corridor_id)?;
        let engine = engine(&self.engine_id)?;
        let bundle = self.preset.bundle();
        let sliders = &self.sliders;

        let detour_pct = sliders.detour_pct.unwrap_or(baseline.detour_pct);
        let effective_distance_nm = effective_distance_nm(corridor.distance_nm, detour_pct);

        let parameters = ScenarioParameters {
            boundary: self.boundary,
            gwp_horizon: self.gwp_horizon,
            corridor_distance_nm: effective_distance_nm,
            methane_slip_pct: sliders.methane_slip_pct.unwrap_or(engine.default_slip_pct),
            shipping_energy_pct_per_1000nm: sliders
                .shipping_rate_per_1000nm
                .unwrap_or(engine.shipping_energy_pct_per_1000nm),
            upstream_leak_pct: sliders.upstream_leak_pct.unwrap_or(bundle.upstream_leak_pct),
            processing_energy_pct: sliders
                .processing_pct
                .unwrap_or(bundle.processing_energy_pct),
            liquefaction_energy_pct: sliders
                .liquefaction_pct
                .unwrap_or(bundle.liquefaction_energy_pct),
            regas_energy_pct: sliders.regas_pct.unwrap_or(bundle.regas_energy_pct),
            plant_efficiency_pct: sliders
                .plant_efficiency_pct
                .unwrap_or(bundle.plant_efficiency_pct),
            coal_baseline_g_per_kwh: sliders
                .coal_baseline_g_per_kwh
                .unwrap_or(baseline.coal_baseline_g_per_kwh),
        };

        Ok(ResolvedScenario {
            parameters,
            corridor: corridor.clone(),
            engine: engine.clone(),
            gwp: self.gwp_horizon.factor(),
            preset: self.preset,
            effective_distance_nm,
        })
    }
}

impl ResolvedScenario {
    /// Run the calculator on the resolved parameters with this scenario's GWP
    pub fn evaluate(&self, calculator: &StageEmissionCalculator) -> CorridorResult<ScenarioResult> {
        calculator.evaluate(&self.parameters, &self.gwp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::reference::GwpHorizon;
    use crate::scenario::{AssumptionBundle, PresetId, SliderState};
    use lngcorr_core::errors::CorridorError;

    #[test]
    fn test_default_state_matches_default_parameters() {
        let resolved = ScenarioState::default()
            .resolve(&BaselineDefaults::default())
            .unwrap();
        assert_eq!(resolved.parameters, ScenarioParameters::default());
        assert_eq!(resolved.effective_distance_nm, 9000.0);
        assert_eq!(resolved.gwp.label, "GWP100");
    }

    #[test]
    fn test_engine_supplies_slip_and_rate() {
        let state = ScenarioState {
            engine_id: "x_df".to_string(),
            ..ScenarioState::default()
        };
        let resolved = state.resolve(&BaselineDefaults::default()).unwrap();
        assert_eq!(resolved.parameters.methane_slip_pct, 1.6);
        assert_eq!(resolved.parameters.shipping_energy_pct_per_1000nm, 0.9);
    }

    #[test]
    fn test_preset_then_sliders() {
        let state = ScenarioState {
            preset: PresetSelection::Named(PresetId::Pessimistic),
            sliders: SliderState {
                upstream_leak_pct: Some(0.8),
                ..SliderState::default()
            },
            ..ScenarioState::default()
        };
        let params = state.resolve(&BaselineDefaults::default()).unwrap().parameters;
        // Slider wins over the preset
        assert_eq!(params.upstream_leak_pct, 0.8);
        // Preset wins over nothing
        assert_eq!(params.liquefaction_energy_pct, 11.0);
        assert_eq!(params.plant_efficiency_pct, 45.0);
    }

    #[test]
    fn test_custom_bundle() {
        let bundle = AssumptionBundle {
            upstream_leak_pct: 2.2,
            processing_energy_pct: 2.5,
            liquefaction_energy_pct: 9.0,
            regas_energy_pct: 1.2,
            plant_efficiency_pct: 50.0,
        };
        let state = ScenarioState {
            preset: PresetSelection::Custom(bundle),
            ..ScenarioState::default()
        };
        let params = state.resolve(&BaselineDefaults::default()).unwrap().parameters;
        assert_eq!(params.upstream_leak_pct, 2.2);
        assert_eq!(params.regas_energy_pct, 1.2);
        assert_eq!(PresetId::Default.bundle().upstream_leak_pct, 1.5);
    }

    #[test]
    fn test_detour_extends_distance() {
        let state = ScenarioState {
            corridor_id: "aus_japan".to_string(),
            sliders: SliderState {
                detour_pct: Some(50.0),
                ..SliderState::default()
            },
            ..ScenarioState::default()
        };
        let resolved = state.resolve(&BaselineDefaults::default()).unwrap();
        assert_eq!(resolved.effective_distance_nm, 5850.0);
        assert_eq!(resolved.parameters.corridor_distance_nm, 5850.0);
    }

    #[test]
    fn test_detour_clamped() {
        assert_eq!(effective_distance_nm(1000.0, 500.0), 3000.0);
        assert_eq!(effective_distance_nm(1000.0, -20.0), 1000.0);
    }

    #[test]
    fn test_baseline_defaults_apply() {
        let baseline = BaselineDefaults {
            coal_baseline_g_per_kwh: 1000.0,
            detour_pct: 10.0,
        };
        let state = ScenarioState {
            boundary: Boundary::WellToWire,
            gwp_horizon: GwpHorizon::Twenty,
            ..ScenarioState::default()
        };
        let resolved = state.resolve(&baseline).unwrap();
        assert_eq!(resolved.parameters.coal_baseline_g_per_kwh, 1000.0);
        assert!((resolved.effective_distance_nm - 9900.0).abs() < 1e-9);
        assert_eq!(resolved.parameters.boundary, Boundary::WellToWire);
        assert_eq!(resolved.gwp.ch4_multiplier, 80.0);
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let state = ScenarioState {
            corridor_id: "north_pole".to_string(),
            ..ScenarioState::default()
        };
        assert_eq!(
            state.resolve(&BaselineDefaults::default()).unwrap_err(),
            CorridorError::invalid("corridor", "north_pole")
        );

        let state = ScenarioState {
            engine_id: "oars".to_string(),
            ..ScenarioState::default()
        };
        assert_eq!(
            state.resolve(&BaselineDefaults::default()).unwrap_err(),
            CorridorError::invalid("engine", "oars")
        );
    }
}
