use indexmap::IndexMap;
use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Propulsion family of an LNG carrier
///
/// Supplies the default methane slip and fuel burn of a scenario until the
/// user overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineProfile {
    pub id: String,
    pub label: String,
    /// Typical unburned methane as a share of fuel
    /// unit: %
    pub default_slip_pct: FloatValue,
    /// Fuel energy burned per 1000 nm as a share of delivered energy
    /// unit: % / 1000 nm
    pub shipping_energy_pct_per_1000nm: FloatValue,
}

impl EngineProfile {
    fn new(
        id: &str,
        label: &str,
        default_slip_pct: FloatValue,
        shipping_energy_pct_per_1000nm: FloatValue,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            default_slip_pct,
            shipping_energy_pct_per_1000nm,
        }
    }
}

static ENGINES: LazyLock<IndexMap<String, EngineProfile>> = LazyLock::new(|| {
    [
        EngineProfile::new(
            "me_gi",
            "ME-GI / high-pressure dual-fuel (lower slip)",
            0.2,
            0.8,
        ),
        EngineProfile::new(
            "x_df",
            "X-DF / low-pressure dual-fuel (higher slip)",
            1.6,
            0.9,
        ),
        EngineProfile::new("steam_turbine", "Steam turbine (legacy)", 0.1, 1.4),
    ]
    .into_iter()
    .map(|e| (e.id.clone(), e))
    .collect()
});

/// All engine profiles in display order
pub fn engines() -> impl Iterator<Item = &'static EngineProfile> {
    ENGINES.values()
}

/// Look up an engine profile by id
pub fn engine(id: &str) -> CorridorResult<&'static EngineProfile> {
    ENGINES
        .get(id)
        .ok_or_else(|| CorridorError::invalid("engine", id))
}

/// The first engine profile of the table
pub fn default_engine() -> &'static EngineProfile {
    &ENGINES[0]
}
