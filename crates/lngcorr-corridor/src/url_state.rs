//! Shareable state encoding
//!
//! Serialises a [`Comparison`] into a URL query string with short fixed keys,
//! one set per slot (prefixed `a` or `b`), plus `surf` for the heatmap slot.
//!
//! | Key | Field | Key | Field |
//! |-----|-------|-----|-------|
//! | `b` | boundary | `ul` | upstream leak slider |
//! | `g` | GWP horizon | `ms` | methane slip slider |
//! | `c` | corridor id | `pe` | plant efficiency slider |
//! | `e` | engine id | `cb` | coal baseline slider |
//! | `ps` | preset key | `dt` | detour slider |
//! | `xul`, `xpro`, `xliq`, `xreg`, `xpe` | custom preset values | `sr` | shipping rate slider |
//! | | | `liq`, `pro`, `reg` | process energy sliders |
//!
//! Slider keys are always written; an empty value means the slider is unset.
//! Custom preset values are written only for a custom preset.
//!
//! Decoding never fails. A missing key takes the value from the supplied
//! defaults; a malformed value or an unknown id does too, with a warning.

use crate::reference::{corridor, engine};
use crate::scenario::{AssumptionBundle, Comparison, PresetSelection, ScenarioState, SlotId};
use indexmap::IndexMap;
use lngcorr_core::FloatValue;
use std::str::FromStr;
use tracing::warn;

const SURFACE_KEY: &str = "surf";

/// Parsed query string; the first occurrence of a key wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(IndexMap<String, String>);

impl QueryParams {
    /// Parse `key=value&...`, with or without a leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = IndexMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params
                .entry(percent_decode(key))
                .or_insert_with(|| percent_decode(value));
        }
        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    fn set(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    /// Serialise in insertion order
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

/// Decode `%XX` escapes and `+`; invalid escapes are kept literally
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| Some(hex_value(hex[0])? << 4 | hex_value(hex[1])?));
                match escaped {
                    Some(byte) => {
                        out.push(byte);
                        i += 2;
                    }
                    None => out.push(b'%'),
                }
            }
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn format_value(value: FloatValue) -> String {
    value.to_string()
}

fn parse_value(key: &str, raw: &str) -> Option<FloatValue> {
    match raw.trim().parse::<FloatValue>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            warn!(key, value = raw, "Ignoring malformed number in shared state");
            None
        }
    }
}

fn parse_or<T: FromStr>(params: &QueryParams, key: &str, fallback: T) -> T {
    match params.get(key) {
        None => fallback,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = raw, "Ignoring unrecognised value in shared state");
            fallback
        }),
    }
}

fn number_or(params: &QueryParams, key: &str, fallback: FloatValue) -> FloatValue {
    params
        .get(key)
        .and_then(|raw| parse_value(key, raw))
        .unwrap_or(fallback)
}

/// A slider key: empty means unset, malformed means "use the default"
fn slider_or(params: &QueryParams, key: &str, fallback: Option<FloatValue>) -> Option<FloatValue> {
    match params.get(key) {
        None => fallback,
        Some("") => None,
        Some(raw) => parse_value(key, raw).or(fallback),
    }
}

fn id_or(
    params: &QueryParams,
    key: &str,
    fallback: &str,
    known: impl Fn(&str) -> bool,
) -> String {
    match params.get(key) {
        Some(id) if known(id) => id.to_string(),
        Some(id) => {
            warn!(key, id, "Unknown id in shared state, using default");
            fallback.to_string()
        }
        None => fallback.to_string(),
    }
}

/// Slider keys in encoding order, with accessors
type SliderField = (
    &'static str,
    fn(&ScenarioState) -> Option<FloatValue>,
    fn(&mut ScenarioState, Option<FloatValue>),
);

fn slider_fields() -> [SliderField; 9] {
    [
        ("ul", |s| s.sliders.upstream_leak_pct, |s, v| s.sliders.upstream_leak_pct = v),
        ("ms", |s| s.sliders.methane_slip_pct, |s, v| s.sliders.methane_slip_pct = v),
        ("pe", |s| s.sliders.plant_efficiency_pct, |s, v| s.sliders.plant_efficiency_pct = v),
        ("cb", |s| s.sliders.coal_baseline_g_per_kwh, |s, v| s.sliders.coal_baseline_g_per_kwh = v),
        ("dt", |s| s.sliders.detour_pct, |s, v| s.sliders.detour_pct = v),
        ("sr", |s| s.sliders.shipping_rate_per_1000nm, |s, v| s.sliders.shipping_rate_per_1000nm = v),
        ("liq", |s| s.sliders.liquefaction_pct, |s, v| s.sliders.liquefaction_pct = v),
        ("pro", |s| s.sliders.processing_pct, |s, v| s.sliders.processing_pct = v),
        ("reg", |s| s.sliders.regas_pct, |s, v| s.sliders.regas_pct = v),
    ]
}

/// Custom preset keys in encoding order, with accessors
type BundleField = (
    &'static str,
    fn(&AssumptionBundle) -> FloatValue,
    fn(&mut AssumptionBundle, FloatValue),
);

fn custom_fields() -> [BundleField; 5] {
    [
        ("xul", |b| b.upstream_leak_pct, |b, v| b.upstream_leak_pct = v),
        ("xpro", |b| b.processing_energy_pct, |b, v| b.processing_energy_pct = v),
        ("xliq", |b| b.liquefaction_energy_pct, |b, v| b.liquefaction_energy_pct = v),
        ("xreg", |b| b.regas_energy_pct, |b, v| b.regas_energy_pct = v),
        ("xpe", |b| b.plant_efficiency_pct, |b, v| b.plant_efficiency_pct = v),
    ]
}

/// Write one slot's keys into `params`
pub fn encode_scenario(prefix: &str, state: &ScenarioState, params: &mut QueryParams) {
    let key = |k: &str| format!("{prefix}{k}");

    params.set(key("b"), state.boundary.code().to_string());
    params.set(key("g"), state.gwp_horizon.code().to_string());
    params.set(key("c"), state.corridor_id.clone());
    params.set(key("e"), state.engine_id.clone());
    params.set(key("ps"), state.preset.key().to_string());

    if let PresetSelection::Custom(bundle) = &state.preset {
        for (name, get, _) in custom_fields() {
            params.set(key(name), format_value(get(bundle)));
        }
    }

    for (name, get, _) in slider_fields() {
        params.set(key(name), get(state).map(format_value).unwrap_or_default());
    }
}

/// Read one slot's keys, falling back to `defaults` field by field
pub fn decode_scenario(prefix: &str, params: &QueryParams, defaults: &ScenarioState) -> ScenarioState {
    let key = |k: &str| format!("{prefix}{k}");
    let mut state = defaults.clone();

    state.boundary = parse_or(params, &key("b"), defaults.boundary);
    state.gwp_horizon = parse_or(params, &key("g"), defaults.gwp_horizon);
    state.corridor_id = id_or(params, &key("c"), &defaults.corridor_id, |id| {
        corridor(id).is_ok()
    });
    state.engine_id = id_or(params, &key("e"), &defaults.engine_id, |id| engine(id).is_ok());

    state.preset = match params.get(&key("ps")) {
        None => defaults.preset,
        Some(PresetSelection::CUSTOM_KEY) => {
            let mut bundle = defaults.preset.bundle();
            for (name, get, set) in custom_fields() {
                let value = number_or(params, &key(name), get(&bundle));
                set(&mut bundle, value);
            }
            PresetSelection::Custom(bundle)
        }
        Some(raw) => match raw.parse() {
            Ok(id) => PresetSelection::Named(id),
            Err(_) => {
                warn!(key = %key("ps"), value = raw, "Unknown preset in shared state, using default");
                defaults.preset
            }
        },
    };

    for (name, get, set) in slider_fields() {
        let value = slider_or(params, &key(name), get(defaults));
        set(&mut state, value);
    }

    state
}

/// Encode both slots and the heatmap slot as a query string
pub fn encode_comparison(comparison: &Comparison) -> String {
    let mut params = QueryParams::default();
    for slot in SlotId::ALL {
        encode_scenario(slot.url_prefix(), comparison.slot(slot), &mut params);
    }
    params.set(SURFACE_KEY.to_string(), comparison.surface_from.code().to_string());
    params.to_query_string()
}

/// Decode a query string; anything missing or malformed comes from `defaults`
pub fn decode_comparison(query: &str, defaults: &Comparison) -> Comparison {
    let params = QueryParams::parse(query);
    Comparison {
        a: decode_scenario(SlotId::A.url_prefix(), &params, &defaults.a),
        b: decode_scenario(SlotId::B.url_prefix(), &params, &defaults.b),
        surface_from: parse_or(&params, SURFACE_KEY, defaults.surface_from),
    }
}
