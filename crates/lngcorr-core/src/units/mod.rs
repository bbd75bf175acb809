//! Bounds-checked numeric coercion and the fixed energy constants of the model.
//!
//! Every percentage the calculator consumes has a documented range. Inputs
//! outside that range are not errors: they are pulled back into range with
//! [`Bounds::clamp`] right before use, whatever validation happened upstream.
//!
//! # Energy convention
//!
//! All stage energies are expressed relative to a fixed quantity of fuel energy
//! delivered at the destination terminal, [`DELIVERED_ENERGY_MJ`]. One
//! "scenario unit" is that quantity.

mod format;

pub use format::{coal_comparator_label, format_delta, format_number, NOT_APPLICABLE};

use serde::{Deserialize, Serialize};

/// Floating point type used throughout the model
pub type FloatValue = f64;

/// Fuel energy delivered to the destination, the denominator of every stage percentage
/// unit: MJ
pub const DELIVERED_ENERGY_MJ: FloatValue = 1000.0;

/// Energy content of one kilowatt hour
/// unit: MJ/kWh
pub const MJ_PER_KWH: FloatValue = 3.6;

/// Grams per kilogram
pub const G_PER_KG: FloatValue = 1000.0;

/// Closed interval a value is coerced into before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: FloatValue,
    pub max: FloatValue,
}

impl Bounds {
    pub const fn new(min: FloatValue, max: FloatValue) -> Self {
        Self { min, max }
    }

    /// Coerce `value` into `[min, max]`.
    ///
    /// NaN maps to `min` and infinities to the nearest end, so the result is
    /// always finite.
    pub fn clamp(&self, value: FloatValue) -> FloatValue {
        value.max(self.min).min(self.max)
    }
}

/// Distance factor (nm / 1000) and shipping energy rate (% per 1000 nm)
pub const SHIPPING_FACTOR: Bounds = Bounds::new(0.0, 10.0);
/// Shipping energy as a share of delivered energy
pub const SHIPPING_ENERGY_PCT: Bounds = Bounds::new(0.0, 60.0);
/// Processing energy as a share of delivered energy
pub const PROCESSING_ENERGY_PCT: Bounds = Bounds::new(0.0, 30.0);
/// Liquefaction energy as a share of delivered energy
pub const LIQUEFACTION_ENERGY_PCT: Bounds = Bounds::new(0.0, 40.0);
/// Regasification energy as a share of delivered energy
pub const REGAS_ENERGY_PCT: Bounds = Bounds::new(0.0, 15.0);
/// Upstream methane leakage as a share of produced gas mass
pub const UPSTREAM_LEAK_PCT: Bounds = Bounds::new(0.0, 20.0);
/// Unburned methane as a share of ship fuel mass
pub const METHANE_SLIP_PCT: Bounds = Bounds::new(0.0, 10.0);
/// Net electrical efficiency of the receiving power plant
pub const PLANT_EFFICIENCY_PCT: Bounds = Bounds::new(10.0, 75.0);
/// Extra sailing distance relative to the nominal corridor
pub const DETOUR_PCT: Bounds = Bounds::new(0.0, 200.0);

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: FloatValue, b: FloatValue, t: FloatValue) -> FloatValue {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_values_into_range() {
        assert_eq!(PROCESSING_ENERGY_PCT.clamp(45.0), 30.0);
        assert_eq!(PROCESSING_ENERGY_PCT.clamp(-1.0), 0.0);
        assert_eq!(PROCESSING_ENERGY_PCT.clamp(12.5), 12.5);
        assert_eq!(PLANT_EFFICIENCY_PCT.clamp(5.0), 10.0);
    }

    #[test]
    fn clamp_never_returns_non_finite() {
        assert_eq!(METHANE_SLIP_PCT.clamp(FloatValue::NAN), 0.0);
        assert_eq!(METHANE_SLIP_PCT.clamp(FloatValue::INFINITY), 10.0);
        assert_eq!(METHANE_SLIP_PCT.clamp(FloatValue::NEG_INFINITY), 0.0);
    }

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }
}
