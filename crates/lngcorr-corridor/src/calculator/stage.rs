use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supply-chain stage, in the order stages appear in every breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Upstream leakage (CH₄)")]
    UpstreamLeakage,
    #[serde(rename = "Processing")]
    Processing,
    #[serde(rename = "Liquefaction")]
    Liquefaction,
    #[serde(rename = "Shipping (CO₂)")]
    ShippingCo2,
    #[serde(rename = "Shipping slip (CH₄)")]
    ShippingSlip,
    #[serde(rename = "Regasification")]
    Regasification,
    #[serde(rename = "Combustion (CO₂)")]
    Combustion,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::UpstreamLeakage,
        Stage::Processing,
        Stage::Liquefaction,
        Stage::ShippingCo2,
        Stage::ShippingSlip,
        Stage::Regasification,
        Stage::Combustion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::UpstreamLeakage => "Upstream leakage (CH₄)",
            Stage::Processing => "Processing",
            Stage::Liquefaction => "Liquefaction",
            Stage::ShippingCo2 => "Shipping (CO₂)",
            Stage::ShippingSlip => "Shipping slip (CH₄)",
            Stage::Regasification => "Regasification",
            Stage::Combustion => "Combustion (CO₂)",
        }
    }

    /// Whether the stage belongs to the voyage itself
    pub fn is_shipping(&self) -> bool {
        matches!(self, Stage::ShippingCo2 | Stage::ShippingSlip)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emissions attributed to one stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageBreakdownEntry {
    pub stage: Stage,
    /// unit: g CO2
    pub co2_g: FloatValue,
    /// Methane expressed as CO2 equivalent at the active GWP
    /// unit: g CO2e
    pub ch4_co2e_g: FloatValue,
}

impl StageBreakdownEntry {
    /// An entry for a stage outside the active boundary
    pub fn excluded(stage: Stage) -> Self {
        Self {
            stage,
            co2_g: 0.0,
            ch4_co2e_g: 0.0,
        }
    }

    /// unit: g CO2e
    pub fn total_g(&self) -> FloatValue {
        self.co2_g + self.ch4_co2e_g
    }
}
