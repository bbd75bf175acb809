use super::resolve::ResolvedScenario;
use super::state::ScenarioState;
use crate::calculator::ScenarioResult;
use crate::config::ModelConfig;
use crate::heatmap::{HeatmapGrid, MarkerPosition};
use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One of the two scenario slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SlotId {
    #[default]
    A,
    B,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::A, SlotId::B];

    pub fn code(&self) -> &'static str {
        match self {
            SlotId::A => "A",
            SlotId::B => "B",
        }
    }

    /// Prefix of this slot's keys in shareable state
    pub fn url_prefix(&self) -> &'static str {
        match self {
            SlotId::A => "a",
            SlotId::B => "b",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotId::A => "Scenario A",
            SlotId::B => "Scenario B",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SlotId {
    type Err = CorridorError;

    fn from_str(s: &str) -> CorridorResult<Self> {
        match s {
            "A" | "a" => Ok(SlotId::A),
            "B" | "b" => Ok(SlotId::B),
            _ => Err(CorridorError::invalid("scenario slot", s)),
        }
    }
}

/// Two independently owned scenarios and the slot that drives the heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: ScenarioState,
    pub b: ScenarioState,
    pub surface_from: SlotId,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            a: ScenarioState::default(),
            b: ScenarioState::default_b(),
            surface_from: SlotId::A,
        }
    }
}

/// What one slot produced; each slot fails on its own
#[derive(Debug, Clone, PartialEq)]
pub struct SlotOutcome {
    pub resolved: CorridorResult<ResolvedScenario>,
    pub result: CorridorResult<ScenarioResult>,
}

impl SlotOutcome {
    fn evaluate(state: &ScenarioState, config: &ModelConfig) -> Self {
        let resolved = state.resolve(&config.baseline);
        let result = match &resolved {
            Ok(resolved) => resolved.evaluate(&config.calculator()),
            Err(e) => Err(e.clone()),
        };
        Self { resolved, result }
    }

    /// Resolved scenario and its result, when both exist
    pub fn evaluation(&self) -> Option<(&ResolvedScenario, &ScenarioResult)> {
        match (&self.resolved, &self.result) {
            (Ok(resolved), Ok(result)) => Some((resolved, result)),
            _ => None,
        }
    }
}

/// A − B for the headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDiff {
    /// unit: g CO2e
    pub total_co2e_g: FloatValue,
    /// unit: percentage points
    pub shipping_share_pct: FloatValue,
    /// `None` unless both slots have a Δ vs coal
    /// unit: g CO2e / kWh
    pub delta_vs_coal_g_per_kwh: Option<FloatValue>,
}

impl ScenarioDiff {
    pub fn between(a: &ScenarioResult, b: &ScenarioResult) -> Self {
        let delta_vs_coal_g_per_kwh = match (a.delta_vs_coal_g_per_kwh, b.delta_vs_coal_g_per_kwh) {
            (Some(a), Some(b)) => Some(a - b),
            _ => None,
        };
        Self {
            total_co2e_g: a.total_co2e_g - b.total_co2e_g,
            shipping_share_pct: a.shipping_share_pct - b.shipping_share_pct,
            delta_vs_coal_g_per_kwh,
        }
    }
}

/// A slot's own point on the heatmap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMarker {
    pub slot: SlotId,
    /// unit: %
    pub leakage_pct: FloatValue,
    /// unit: %
    pub slip_pct: FloatValue,
    pub position: MarkerPosition,
}

/// Everything derived from a [`Comparison`] in one pass
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub a: SlotOutcome,
    pub b: SlotOutcome,
    pub surface_from: SlotId,
    pub heatmap: CorridorResult<HeatmapGrid>,
}

impl ComparisonOutcome {
    pub fn slot(&self, slot: SlotId) -> &SlotOutcome {
        match slot {
            SlotId::A => &self.a,
            SlotId::B => &self.b,
        }
    }

    /// A − B, when both slots evaluated
    pub fn diff(&self) -> Option<ScenarioDiff> {
        match (&self.a.result, &self.b.result) {
            (Ok(a), Ok(b)) => Some(ScenarioDiff::between(a, b)),
            _ => None,
        }
    }

    /// Markers for every slot that resolved, positioned on the heatmap
    pub fn markers(&self) -> Vec<HeatmapMarker> {
        let Ok(grid) = &self.heatmap else {
            return Vec::new();
        };
        SlotId::ALL
            .into_iter()
            .filter_map(|slot| {
                let resolved = self.slot(slot).resolved.as_ref().ok()?;
                let leakage_pct = resolved.parameters.upstream_leak_pct;
                let slip_pct = resolved.parameters.methane_slip_pct;
                Some(HeatmapMarker {
                    slot,
                    leakage_pct,
                    slip_pct,
                    position: grid.marker_position(leakage_pct, slip_pct),
                })
            })
            .collect()
    }
}

impl Comparison {
    pub fn slot(&self, slot: SlotId) -> &ScenarioState {
        match slot {
            SlotId::A => &self.a,
            SlotId::B => &self.b,
        }
    }

    pub fn slot_mut(&mut self, slot: SlotId) -> &mut ScenarioState {
        match slot {
            SlotId::A => &mut self.a,
            SlotId::B => &mut self.b,
        }
    }

    /// Heatmap anchored on the selected slot
    pub fn heatmap(&self, config: &ModelConfig) -> CorridorResult<HeatmapGrid> {
        let resolved = self.slot(self.surface_from).resolve(&config.baseline)?;
        HeatmapGrid::generate(
            &config.calculator(),
            &resolved.parameters,
            &resolved.gwp,
            &config.heatmap,
        )
    }

    /// Evaluate both slots and the heatmap
    ///
    /// The slots and the heatmap are independent and computed in parallel.
    pub fn evaluate(&self, config: &ModelConfig) -> ComparisonOutcome {
        let ((a, b), heatmap) = rayon::join(
            || {
                rayon::join(
                    || SlotOutcome::evaluate(&self.a, config),
                    || SlotOutcome::evaluate(&self.b, config),
                )
            },
            || self.heatmap(config),
        );
        debug!(
            surface_from = %self.surface_from,
            a_ok = a.result.is_ok(),
            b_ok = b.result.is_ok(),
            heatmap_ok = heatmap.is_ok(),
            "Evaluated comparison"
        );
        ComparisonOutcome {
            a,
            b,
            surface_from: self.surface_from,
            heatmap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::scenario::SliderState;

    #[test]
    fn test_default_slots_differ_by_gwp() {
        let comparison = Comparison::default();
        let outcome = comparison.evaluate(&ModelConfig::default());
        let a = outcome.a.result.as_ref().unwrap();
        let b = outcome.b.result.as_ref().unwrap();
        assert!(b.total_co2e_g > a.total_co2e_g);

        let diff = outcome.diff().unwrap();
        assert_eq!(diff.total_co2e_g, a.total_co2e_g - b.total_co2e_g);
        // Both default to WTW, so neither has a Δ vs coal
        assert_eq!(diff.delta_vs_coal_g_per_kwh, None);
    }

    #[test]
    fn test_diff_of_deltas_when_both_wire() {
        let mut comparison = Comparison::default();
        comparison.a.boundary = Boundary::WellToWire;
        comparison.b.boundary = Boundary::WellToWire;
        let outcome = comparison.evaluate(&ModelConfig::default());
        let a = outcome.a.result.as_ref().unwrap();
        let b = outcome.b.result.as_ref().unwrap();
        let diff = outcome.diff().unwrap();
        assert_eq!(
            diff.delta_vs_coal_g_per_kwh,
            Some(a.delta_vs_coal_g_per_kwh.unwrap() - b.delta_vs_coal_g_per_kwh.unwrap())
        );
    }

    #[test]
    fn test_slot_failure_is_isolated() {
        let mut comparison = Comparison::default();
        comparison.b.corridor_id = "nowhere".to_string();
        let outcome = comparison.evaluate(&ModelConfig::default());
        assert!(outcome.a.result.is_ok());
        assert!(outcome.b.result.is_err());
        assert!(outcome.diff().is_none());
        // Surface follows A, which is fine
        assert!(outcome.heatmap.is_ok());
        assert_eq!(outcome.markers().len(), 1);
    }

    #[test]
    fn test_heatmap_follows_selected_slot() {
        let mut comparison = Comparison::default();
        let config = ModelConfig::default();
        let from_a = comparison.heatmap(&config).unwrap();
        comparison.surface_from = SlotId::B;
        let from_b = comparison.heatmap(&config).unwrap();
        assert_eq!(from_a.gwp_label, "GWP100");
        assert_eq!(from_b.gwp_label, "GWP20");
    }

    #[test]
    fn test_markers_use_resolved_values() {
        let mut comparison = Comparison::default();
        comparison.b.sliders = SliderState {
            upstream_leak_pct: Some(3.0),
            methane_slip_pct: Some(1.5),
            ..SliderState::default()
        };
        let outcome = comparison.evaluate(&ModelConfig::default());
        let markers = outcome.markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].slot, SlotId::A);
        assert_eq!(markers[0].leakage_pct, 1.5);
        assert_eq!(markers[1].position, MarkerPosition { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_slots_are_independent() {
        let mut comparison = Comparison::default();
        comparison.slot_mut(SlotId::A).sliders.upstream_leak_pct = Some(4.0);
        assert_eq!(comparison.b.sliders.upstream_leak_pct, None);
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!("B".parse::<SlotId>().unwrap(), SlotId::B);
        assert_eq!("a".parse::<SlotId>().unwrap(), SlotId::A);
        assert!("C".parse::<SlotId>().is_err());
    }
}
