//! JSON and CSV export of evaluated scenarios.

use crate::calculator::{ScenarioResult, StageBreakdownEntry};
use crate::parameters::ScenarioParameters;
use crate::reference::{Corridor, EngineProfile, GwpFactor};
use crate::scenario::{PresetSelection, ResolvedScenario};
use chrono::{DateTime, SecondsFormat, Utc};
use lngcorr_core::errors::{CorridorError, CorridorResult};
use lngcorr_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Header row of the breakdown CSV
pub const CSV_HEADER: [&str; 5] = [
    "scenario",
    "stage",
    "co2_g",
    "ch4_co2e_g",
    "total_stage_gco2e",
];

/// Reference data a scenario was resolved against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedExport {
    pub corridor: Corridor,
    pub engine: EngineProfile,
    pub gwp: GwpFactor,
    pub preset: PresetSelection,
    /// unit: nm
    pub effective_distance_nm: FloatValue,
}

/// Self-describing JSON snapshot of one evaluated scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioExport {
    pub label: String,
    pub parameters: ScenarioParameters,
    pub derived: DerivedExport,
    pub outputs: ScenarioResult,
    /// RFC 3339 / ISO 8601, UTC
    pub exported_at: String,
}

impl ScenarioExport {
    pub fn new(
        label: &str,
        resolved: &ResolvedScenario,
        result: &ScenarioResult,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            label: label.to_string(),
            parameters: resolved.parameters.clone(),
            derived: DerivedExport {
                corridor: resolved.corridor.clone(),
                engine: resolved.engine.clone(),
                gwp: resolved.gwp.clone(),
                preset: resolved.preset,
                effective_distance_nm: resolved.effective_distance_nm,
            },
            outputs: result.clone(),
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Snapshot stamped with the current time
    pub fn now(label: &str, resolved: &ResolvedScenario, result: &ScenarioResult) -> Self {
        Self::new(label, resolved, result, Utc::now())
    }

    pub fn to_json_pretty(&self) -> CorridorResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CorridorError::Error(e.to_string()))
    }
}

/// Quote a CSV field if it contains a comma, quote or line break
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn csv_row(label: &str, entry: &StageBreakdownEntry) -> String {
    [
        csv_field(label).into_owned(),
        csv_field(entry.stage.label()).into_owned(),
        entry.co2_g.to_string(),
        entry.ch4_co2e_g.to_string(),
        entry.total_g().to_string(),
    ]
    .join(",")
}

/// One CSV row per breakdown entry of each labelled result, header first
pub fn breakdown_csv<'a>(scenarios: impl IntoIterator<Item = (&'a str, &'a ScenarioResult)>) -> String {
    std::iter::once(CSV_HEADER.join(","))
        .chain(scenarios.into_iter().flat_map(|(label, result)| {
            result.breakdown.iter().map(move |entry| csv_row(label, entry))
        }))
        .collect::<Vec<_>>()
        .join("\n")
}
