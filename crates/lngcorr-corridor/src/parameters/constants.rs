//! Physical Constants
//!
//! Energy-to-mass and carbon-intensity factors used to turn stage energies
//! into CO2 and CH4 masses. These are placeholders for a transparent
//! screening model rather than life-cycle inventory values, so they are
//! configuration rather than code.

use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Conversion factors between fuel energy, methane mass and CO2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Lower heating value of methane
    /// unit: MJ / kg CH4
    /// default: 50.0
    pub fuel_lhv_mj_per_kg_ch4: FloatValue,

    /// CO2 released per MJ of natural gas burned at the end use and on board
    /// unit: g CO2 / MJ
    /// default: 56.0
    pub combustion_co2_g_per_mj: FloatValue,

    /// CO2 released per MJ of fuel consumed by processing, liquefaction and regasification
    /// unit: g CO2 / MJ
    /// default: 56.0
    pub process_co2_g_per_mj: FloatValue,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            fuel_lhv_mj_per_kg_ch4: 50.0,
            combustion_co2_g_per_mj: 56.0,
            process_co2_g_per_mj: 56.0,
        }
    }
}

impl PhysicalConstants {
    /// Methane mass carrying `energy_mj` of fuel energy
    /// unit: kg CH4
    pub fn ch4_mass_kg(&self, energy_mj: FloatValue) -> FloatValue {
        energy_mj / self.fuel_lhv_mj_per_kg_ch4
    }

    /// Every factor must be finite and strictly positive
    pub fn validate(&self) -> CorridorResult<()> {
        let factors = [
            ("fuel_lhv_mj_per_kg_ch4", self.fuel_lhv_mj_per_kg_ch4),
            ("combustion_co2_g_per_mj", self.combustion_co2_g_per_mj),
            ("process_co2_g_per_mj", self.process_co2_g_per_mj),
        ];
        match factors
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            Some((name, value)) => Err(CorridorError::Config(format!(
                "constants.{name} must be finite and positive, got {value}"
            ))),
            None => Ok(()),
        }
    }
}
