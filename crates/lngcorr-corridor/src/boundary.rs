//! Boundary policy: which supply-chain stages count towards a footprint.
//!
//! | Boundary | Upstream + midstream | Combustion | Per-kWh conversion |
//! |----------|----------------------|------------|--------------------|
//! | `TTW`    | no                   | yes        | no                 |
//! | `WTW`    | yes                  | yes        | no                 |
//! | `WTWIRE` | yes                  | yes        | yes                |

use crate::calculator::Stage;
use lngcorr_core::errors::{CorridorError, CorridorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// System boundary of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Boundary {
    /// Tank-to-wake: end-use combustion only
    #[serde(rename = "TTW")]
    TankToWake,
    /// Well-to-wake: extraction, processing, transport and combustion
    #[default]
    #[serde(rename = "WTW")]
    WellToWake,
    /// Well-to-wire: well-to-wake expressed per kWh of electricity delivered
    #[serde(rename = "WTWIRE")]
    WellToWire,
}

impl Boundary {
    pub const ALL: [Boundary; 3] = [
        Boundary::TankToWake,
        Boundary::WellToWake,
        Boundary::WellToWire,
    ];

    /// Short code used in exports and shareable URLs
    pub fn code(&self) -> &'static str {
        match self {
            Boundary::TankToWake => "TTW",
            Boundary::WellToWake => "WTW",
            Boundary::WellToWire => "WTWIRE",
        }
    }

    /// Whether upstream and midstream stages (everything before the burner tip) count
    pub fn includes_supply_chain(&self) -> bool {
        matches!(self, Boundary::WellToWake | Boundary::WellToWire)
    }

    /// Whether `stage` contributes to the footprint under this boundary
    pub fn includes(&self, stage: Stage) -> bool {
        match stage {
            Stage::Combustion => true,
            _ => self.includes_supply_chain(),
        }
    }

    /// Whether the total is converted to g/kWh and compared with coal
    pub fn converts_to_electricity(&self) -> bool {
        matches!(self, Boundary::WellToWire)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Boundary {
    type Err = CorridorError;

    fn from_str(s: &str) -> CorridorResult<Self> {
        Boundary::ALL
            .into_iter()
            .find(|b| b.code() == s)
            .ok_or_else(|| CorridorError::invalid("boundary", s))
    }
}
