//! Model configuration
//!
//! Everything a deployment may want to tune without touching code: physical
//! constants, baseline values and heatmap ranges. Read from TOML; every table
//! and key is optional and falls back to its default.
//!
//! ```toml
//! [constants]
//! combustion_co2_g_per_mj = 56.1
//!
//! [baseline]
//! coal_baseline_g_per_kwh = 1000.0
//!
//! [heatmap.slip_pct]
//! min = 0.0
//! max = 5.0
//! steps = 51
//! ```

use crate::calculator::StageEmissionCalculator;
use crate::parameters::{BaselineDefaults, HeatmapRanges, PhysicalConstants};
use lngcorr_core::errors::{CorridorError, CorridorResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Tunable inputs of the corridor model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub constants: PhysicalConstants,
    pub baseline: BaselineDefaults,
    pub heatmap: HeatmapRanges,
}

impl ModelConfig {
    /// Parse a TOML document
    pub fn from_toml_str(document: &str) -> CorridorResult<Self> {
        let config: Self =
            toml::from_str(document).map_err(|e| CorridorError::Config(e.to_string()))?;
        config.constants.validate()?;
        config.heatmap.leakage_pct.validate("leakage")?;
        config.heatmap.slip_pct.validate("slip")?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> CorridorResult<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path)
            .map_err(|e| CorridorError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loading model configuration");
        Self::from_toml_str(&document)
    }

    /// Serialise to TOML
    pub fn to_toml_string(&self) -> CorridorResult<String> {
        toml::to_string(self).map_err(|e| CorridorError::Config(e.to_string()))
    }

    /// A calculator using this configuration's constants
    pub fn calculator(&self) -> StageEmissionCalculator {
        StageEmissionCalculator::from_constants(self.constants.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::AxisSpec;

    #[test]
    fn test_empty_document_is_default() {
        let config = ModelConfig::from_toml_str("").unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ModelConfig::from_toml_str(
            r#"
            [constants]
            combustion_co2_g_per_mj = 56.1

            [heatmap.slip_pct]
            min = 0.0
            max = 5.0
            steps = 51
            "#,
        )
        .unwrap();
        assert!((config.constants.combustion_co2_g_per_mj - 56.1).abs() < 1e-10);
        assert!((config.constants.fuel_lhv_mj_per_kg_ch4 - 50.0).abs() < 1e-10);
        assert_eq!(
            config.heatmap.slip_pct,
            AxisSpec {
                min: 0.0,
                max: 5.0,
                steps: 51
            }
        );
        assert_eq!(config.heatmap.leakage_pct.steps, 61);
        assert!((config.baseline.coal_baseline_g_per_kwh - 900.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_axis_rejected() {
        let err = ModelConfig::from_toml_str(
            r#"
            [heatmap.leakage_pct]
            min = 0.0
            max = 6.0
            steps = 1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CorridorError::InvalidAxis { .. }));
    }

    #[test]
    fn test_non_physical_constants_rejected() {
        let err = ModelConfig::from_toml_str(
            r#"
            [constants]
            combustion_co2_g_per_mj = -56.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CorridorError::Config(_)));

        let err = ModelConfig::from_toml_str(
            r#"
            [constants]
            fuel_lhv_mj_per_kg_ch4 = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CorridorError::Config(_)));
        assert!(!err.is_degenerate());
    }

    #[test]
    fn test_malformed_document() {
        let err = ModelConfig::from_toml_str("constants = 3").unwrap_err();
        assert!(matches!(err, CorridorError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ModelConfig::default();
        let serialised = config.to_toml_string().unwrap();
        let deserialised = ModelConfig::from_toml_str(&serialised).unwrap();
        assert_eq!(config, deserialised);
    }

    #[test]
    fn test_missing_file() {
        let err = ModelConfig::from_path("/nonexistent/lngcorr.toml").unwrap_err();
        assert!(matches!(err, CorridorError::Config(_)));
    }
}
