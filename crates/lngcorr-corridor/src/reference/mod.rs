//! Immutable reference tables: corridors, engine families and GWP presets.
//!
//! Each table is an ordered registry keyed by id. The first entry of each
//! table is its documented default, used only where a caller explicitly asks
//! for a fallback (shareable-state decoding). Plain lookups of an unknown id
//! fail with [`CorridorError::InvalidParameter`](lngcorr_core::errors::CorridorError).

mod corridors;
mod engines;
mod gwp;

pub use corridors::{corridor, corridors, default_corridor, Corridor};
pub use engines::{default_engine, engine, engines, EngineProfile};
pub use gwp::{gwp_factor, GwpFactor, GwpHorizon};
