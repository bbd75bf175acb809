//! LNG corridor emissions model
//!
//! Re-exports the workspace crates under one name.

pub use lngcorr_core::{errors, units, FloatValue};
pub use lngcorr_corridor::*;
