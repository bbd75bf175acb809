use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supply-chain assumptions supplied by a preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionBundle {
    /// unit: %
    pub upstream_leak_pct: FloatValue,
    /// unit: %
    pub processing_energy_pct: FloatValue,
    /// unit: %
    pub liquefaction_energy_pct: FloatValue,
    /// unit: %
    pub regas_energy_pct: FloatValue,
    /// unit: %
    pub plant_efficiency_pct: FloatValue,
}

/// Named assumption bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetId {
    Optimistic,
    #[default]
    Default,
    Pessimistic,
}

const OPTIMISTIC: AssumptionBundle = AssumptionBundle {
    upstream_leak_pct: 0.5,
    processing_energy_pct: 1.5,
    liquefaction_energy_pct: 6.0,
    regas_energy_pct: 0.5,
    plant_efficiency_pct: 60.0,
};

const DEFAULT: AssumptionBundle = AssumptionBundle {
    upstream_leak_pct: 1.5,
    processing_energy_pct: 2.0,
    liquefaction_energy_pct: 8.0,
    regas_energy_pct: 1.0,
    plant_efficiency_pct: 55.0,
};

const PESSIMISTIC: AssumptionBundle = AssumptionBundle {
    upstream_leak_pct: 3.5,
    processing_energy_pct: 3.0,
    liquefaction_energy_pct: 11.0,
    regas_energy_pct: 2.0,
    plant_efficiency_pct: 45.0,
};

impl PresetId {
    pub const ALL: [PresetId; 3] = [PresetId::Optimistic, PresetId::Default, PresetId::Pessimistic];

    pub fn key(&self) -> &'static str {
        match self {
            PresetId::Optimistic => "optimistic",
            PresetId::Default => "default",
            PresetId::Pessimistic => "pessimistic",
        }
    }

    /// The immutable bundle behind this preset
    pub fn bundle(&self) -> AssumptionBundle {
        match self {
            PresetId::Optimistic => OPTIMISTIC,
            PresetId::Default => DEFAULT,
            PresetId::Pessimistic => PESSIMISTIC,
        }
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PresetId {
    type Err = CorridorError;

    fn from_str(s: &str) -> CorridorResult<Self> {
        PresetId::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| CorridorError::invalid("preset", s))
    }
}

/// Which assumptions a scenario starts from
///
/// A custom selection always carries its values, so "custom" without values
/// cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PresetSelection {
    Named(PresetId),
    Custom(AssumptionBundle),
}

impl Default for PresetSelection {
    fn default() -> Self {
        PresetSelection::Named(PresetId::Default)
    }
}

impl PresetSelection {
    /// Key written to shareable state
    pub const CUSTOM_KEY: &'static str = "custom";

    pub fn key(&self) -> &'static str {
        match self {
            PresetSelection::Named(id) => id.key(),
            PresetSelection::Custom(_) => Self::CUSTOM_KEY,
        }
    }

    pub fn bundle(&self) -> AssumptionBundle {
        match self {
            PresetSelection::Named(id) => id.bundle(),
            PresetSelection::Custom(bundle) => *bundle,
        }
    }

    /// Start a custom selection from the values of this one
    pub fn to_custom(&self) -> Self {
        PresetSelection::Custom(self.bundle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        let o = PresetId::Optimistic.bundle();
        let d = PresetId::Default.bundle();
        let p = PresetId::Pessimistic.bundle();
        assert!(o.upstream_leak_pct < d.upstream_leak_pct);
        assert!(d.upstream_leak_pct < p.upstream_leak_pct);
        assert!(o.plant_efficiency_pct > p.plant_efficiency_pct);
    }

    #[test]
    fn test_editing_custom_leaves_named_untouched() {
        let mut selection = PresetSelection::Named(PresetId::Pessimistic).to_custom();
        if let PresetSelection::Custom(bundle) = &mut selection {
            bundle.upstream_leak_pct = 9.0;
        }
        assert_eq!(selection.bundle().upstream_leak_pct, 9.0);
        assert_eq!(PresetId::Pessimistic.bundle().upstream_leak_pct, 3.5);
        assert_eq!(selection.key(), "custom");
    }

    #[test]
    fn test_parse_keys() {
        for id in PresetId::ALL {
            assert_eq!(id.key().parse::<PresetId>().unwrap(), id);
        }
        assert!("custom".parse::<PresetId>().is_err());
    }

    #[test]
    fn test_selection_serialisation() {
        let json = serde_json::to_string(&PresetSelection::Named(PresetId::Optimistic)).unwrap();
        assert_eq!(json, r#"{"kind":"named","value":"optimistic"}"#);
    }
}
