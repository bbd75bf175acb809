use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time horizon over which methane is weighed against CO2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GwpHorizon {
    #[serde(rename = "20")]
    Twenty,
    #[default]
    #[serde(rename = "100")]
    Hundred,
}

impl GwpHorizon {
    pub const ALL: [GwpHorizon; 2] = [GwpHorizon::Twenty, GwpHorizon::Hundred];

    /// Horizon in years, as written in URLs and exports
    pub fn code(&self) -> &'static str {
        match self {
            GwpHorizon::Twenty => "20",
            GwpHorizon::Hundred => "100",
        }
    }

    /// The multiplier active for this horizon
    pub fn factor(&self) -> GwpFactor {
        gwp_factor(*self)
    }
}

impl fmt::Display for GwpHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GwpHorizon {
    type Err = CorridorError;

    fn from_str(s: &str) -> CorridorResult<Self> {
        GwpHorizon::ALL
            .into_iter()
            .find(|h| h.code() == s)
            .ok_or_else(|| CorridorError::invalid("GWP horizon", s))
    }
}

/// Global warming potential of methane relative to CO2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GwpFactor {
    /// g CO2e per g CH4
    pub ch4_multiplier: FloatValue,
    pub label: String,
}

/// GWP preset for a horizon
pub fn gwp_factor(horizon: GwpHorizon) -> GwpFactor {
    let (ch4_multiplier, label) = match horizon {
        GwpHorizon::Twenty => (80.0, "GWP20"),
        GwpHorizon::Hundred => (28.0, "GWP100"),
    };
    GwpFactor {
        ch4_multiplier,
        label: label.to_string(),
    }
}
