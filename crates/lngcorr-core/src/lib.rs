//! Shared building blocks for the lngcorr corridor model.
//!
//! - [`errors`]: the error taxonomy every fallible operation reports through
//! - [`units`]: clamp bounds, fixed energy constants and display formatting

pub mod errors;
pub mod units;

pub use units::FloatValue;
