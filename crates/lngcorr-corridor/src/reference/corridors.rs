use indexmap::IndexMap;
use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A shipping route between a liquefaction terminal and a receiving terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub id: String,
    pub label: String,
    /// Nominal one-way sailing distance
    /// unit: nautical miles
    pub distance_nm: FloatValue,
}

impl Corridor {
    fn new(id: &str, label: &str, distance_nm: FloatValue) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            distance_nm,
        }
    }
}

static CORRIDORS: LazyLock<IndexMap<String, Corridor>> = LazyLock::new(|| {
    [
        Corridor::new(
            "gulf_japan_panama",
            "U.S. Gulf → Japan (via Panama)",
            9000.0,
        ),
        Corridor::new(
            "qatar_japan_malacca",
            "Qatar → Japan (via Malacca)",
            6700.0,
        ),
        Corridor::new("aus_japan", "NW Australia → Japan", 3900.0),
        Corridor::new("custom_5000", "Generic corridor", 5000.0),
    ]
    .into_iter()
    .map(|c| (c.id.clone(), c))
    .collect()
});

/// All corridors in display order
pub fn corridors() -> impl Iterator<Item = &'static Corridor> {
    CORRIDORS.values()
}

/// Look up a corridor by id
pub fn corridor(id: &str) -> CorridorResult<&'static Corridor> {
    CORRIDORS
        .get(id)
        .ok_or_else(|| CorridorError::invalid("corridor", id))
}

/// The first corridor of the table
pub fn default_corridor() -> &'static Corridor {
    &CORRIDORS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_gulf_to_japan() {
        let c = default_corridor();
        assert_eq!(c.id, "gulf_japan_panama");
        assert_eq!(c.distance_nm, 9000.0);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(corridor("aus_japan").unwrap().distance_nm, 3900.0);
        assert_eq!(corridors().count(), 4);
    }

    #[test]
    fn unknown_id_is_invalid() {
        assert_eq!(
            corridor("atlantis").unwrap_err(),
            CorridorError::invalid("corridor", "atlantis")
        );
    }
}
