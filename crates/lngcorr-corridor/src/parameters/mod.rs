//! Model parameters
//!
//! This module contains the calculator's input record and the configuration
//! structs that feed it. Configuration structs provide defaults matching the
//! reference assumptions and accept partial documents via `#[serde(default)]`.

mod baseline;
mod constants;
mod heatmap_ranges;
mod scenario;

pub use baseline::BaselineDefaults;
pub use constants::PhysicalConstants;
pub use heatmap_ranges::{AxisSpec, HeatmapRanges};
pub use scenario::ScenarioParameters;
