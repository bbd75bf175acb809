//! Emissions engine for maritime LNG corridors
//!
//! This crate models the greenhouse-gas footprint of delivering 1000 MJ of
//! energy through an LNG supply chain, stage by stage, and sweeps it into a
//! break-even surface against a coal-fired electricity baseline.
//!
//! # Module Organisation
//!
//! - `calculator`: the stage emission calculator and its result record
//! - `heatmap`: break-even sweep over upstream leakage × methane slip
//! - `scenario`: presets, slider layering and the A/B comparison
//! - `reference`: corridors, engine families and GWP horizons
//! - `parameters`: calculator input and the configuration that feeds it
//! - `config`: TOML model configuration
//! - `url_state`: shareable query-string state
//! - `export`: JSON and CSV export
//!
//! # Example
//!
//! ```
//! use lngcorr_corridor::calculator::StageEmissionCalculator;
//! use lngcorr_corridor::parameters::BaselineDefaults;
//! use lngcorr_corridor::scenario::ScenarioState;
//!
//! let resolved = ScenarioState::default()
//!     .resolve(&BaselineDefaults::default())
//!     .unwrap();
//! let result = resolved.evaluate(&StageEmissionCalculator::new()).unwrap();
//! assert!(result.total_co2e_g > 0.0);
//! ```

pub mod boundary;
pub mod calculator;
pub mod config;
pub mod export;
pub mod heatmap;
pub mod parameters;
pub mod reference;
pub mod scenario;
pub mod url_state;
