//! Preset and scenario resolution
//!
//! A scenario is described by a [`ScenarioState`]: the boundary, GWP horizon,
//! corridor and engine selections, an assumption preset and whatever sliders
//! the user has moved. Resolution layers these, lowest to highest:
//!
//! 1. engine profile (slip, shipping rate) and [`BaselineDefaults`](crate::parameters::BaselineDefaults)
//!    (coal baseline, detour)
//! 2. the preset bundle, named or custom
//! 3. slider values that are set
//!
//! into one [`ScenarioParameters`](crate::parameters::ScenarioParameters)
//! record. Shared preset tables are never written to; a custom bundle lives
//! inside the state that owns it.
//!
//! Two independent slots, A and B, are compared side by side by
//! [`Comparison`]; the heatmap follows whichever slot the caller selects.

mod comparison;
mod preset;
mod resolve;
mod state;

pub use comparison::{Comparison, ComparisonOutcome, HeatmapMarker, ScenarioDiff, SlotId, SlotOutcome};
pub use preset::{AssumptionBundle, PresetId, PresetSelection};
pub use resolve::{effective_distance_nm, ResolvedScenario};
pub use state::{ScenarioState, SliderState};
