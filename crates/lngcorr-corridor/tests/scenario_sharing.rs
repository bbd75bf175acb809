//! End-to-end tests across scenario resolution, shareable state and the heatmap.

use lngcorr_corridor::boundary::Boundary;
use lngcorr_corridor::config::ModelConfig;
use lngcorr_corridor::export::{breakdown_csv, ScenarioExport};
use lngcorr_corridor::heatmap::{cell_value, HeatmapGrid};
use lngcorr_corridor::reference::{corridors, engines, GwpHorizon};
use lngcorr_corridor::scenario::{
    AssumptionBundle, Comparison, PresetId, PresetSelection, ScenarioState, SlotId, SliderState,
};
use lngcorr_corridor::url_state::{decode_comparison, encode_comparison};
use proptest::prelude::*;

fn corridor_ids() -> Vec<String> {
    corridors().map(|c| c.id.clone()).collect()
}

fn engine_ids() -> Vec<String> {
    engines().map(|e| e.id.clone()).collect()
}

fn slider() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0..100.0)
}

fn sliders() -> impl Strategy<Value = SliderState> {
    (
        (slider(), slider(), slider(), slider(), slider()),
        (slider(), slider(), slider(), slider()),
    )
        .prop_map(|((ul, ms, pe, cb, dt), (sr, liq, pro, reg))| SliderState {
            upstream_leak_pct: ul,
            methane_slip_pct: ms,
            plant_efficiency_pct: pe,
            coal_baseline_g_per_kwh: cb,
            detour_pct: dt,
            shipping_rate_per_1000nm: sr,
            liquefaction_pct: liq,
            processing_pct: pro,
            regas_pct: reg,
        })
}

fn presets() -> impl Strategy<Value = PresetSelection> {
    prop_oneof![
        prop::sample::select(PresetId::ALL.to_vec()).prop_map(PresetSelection::Named),
        (0.0..20.0, 0.0..30.0, 0.0..40.0, 0.0..15.0, 10.0..75.0).prop_map(
            |(leak, processing, liquefaction, regas, efficiency)| {
                PresetSelection::Custom(AssumptionBundle {
                    upstream_leak_pct: leak,
                    processing_energy_pct: processing,
                    liquefaction_energy_pct: liquefaction,
                    regas_energy_pct: regas,
                    plant_efficiency_pct: efficiency,
                })
            }
        ),
    ]
}

fn states() -> impl Strategy<Value = ScenarioState> {
    (
        prop::sample::select(Boundary::ALL.to_vec()),
        prop::sample::select(GwpHorizon::ALL.to_vec()),
        prop::sample::select(corridor_ids()),
        prop::sample::select(engine_ids()),
        presets(),
        sliders(),
    )
        .prop_map(
            |(boundary, gwp_horizon, corridor_id, engine_id, preset, sliders)| ScenarioState {
                boundary,
                gwp_horizon,
                corridor_id,
                engine_id,
                preset,
                sliders,
            },
        )
}

fn comparisons() -> impl Strategy<Value = Comparison> {
    (states(), states(), prop::sample::select(SlotId::ALL.to_vec())).prop_map(
        |(a, b, surface_from)| Comparison { a, b, surface_from },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn shared_state_round_trips(comparison in comparisons()) {
        let query = encode_comparison(&comparison);
        let decoded = decode_comparison(&query, &Comparison::default());
        prop_assert_eq!(&decoded, &comparison);
        prop_assert_eq!(encode_comparison(&decoded), query);
    }

    #[test]
    fn encoding_is_canonical(query in "[a-z]{1,4}=[A-Za-z0-9_.%]{0,8}(&[a-z]{1,4}=[A-Za-z0-9_.%]{0,8}){0,12}") {
        let once = encode_comparison(&decode_comparison(&query, &Comparison::default()));
        let twice = encode_comparison(&decode_comparison(&once, &Comparison::default()));
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn heatmap_cells_match_slot_evaluation() {
    let config = ModelConfig::from_toml_str(
        r#"
        [heatmap.leakage_pct]
        min = 0.0
        max = 6.0
        steps = 7

        [heatmap.slip_pct]
        min = 0.0
        max = 3.0
        steps = 4
        "#,
    )
    .unwrap();

    let mut comparison = Comparison::default();
    comparison.surface_from = SlotId::B;
    comparison.b.engine_id = "x_df".to_string();
    comparison.b.sliders.detour_pct = Some(25.0);

    let outcome = comparison.evaluate(&config);
    let grid: &HeatmapGrid = outcome.heatmap.as_ref().unwrap();
    let (resolved, _) = outcome.b.evaluation().unwrap();

    // Leakage 3 %, slip 1 % sit on the grid
    let expected = cell_value(&config.calculator(), &resolved.parameters, &resolved.gwp, 3.0, 1.0)
        .unwrap();
    assert_eq!(grid.cell(1, 3), Some(expected));
    assert_eq!(grid.gwp_label, "GWP20");

    let wire = ScenarioState {
        boundary: Boundary::WellToWire,
        sliders: SliderState {
            upstream_leak_pct: Some(3.0),
            methane_slip_pct: Some(1.0),
            ..comparison.b.sliders
        },
        ..comparison.b.clone()
    };
    let standalone = wire
        .resolve(&config.baseline)
        .unwrap()
        .evaluate(&config.calculator())
        .unwrap();
    assert_eq!(standalone.delta_vs_coal_g_per_kwh, Some(expected));
}

#[test]
fn shared_link_reproduces_outputs() {
    let mut comparison = Comparison::default();
    comparison.a.boundary = Boundary::WellToWire;
    comparison.a.preset = PresetSelection::Named(PresetId::Pessimistic).to_custom();
    comparison.b.corridor_id = "aus_japan".to_string();
    comparison.b.sliders.methane_slip_pct = Some(0.4);

    let config = ModelConfig::default();
    let before = comparison.evaluate(&config);
    let shared = decode_comparison(&encode_comparison(&comparison), &Comparison::default());
    let after = shared.evaluate(&config);

    assert_eq!(before.a.result, after.a.result);
    assert_eq!(before.b.result, after.b.result);
    assert_eq!(before.diff(), after.diff());
}

#[test]
fn export_both_slots() {
    let outcome = Comparison::default().evaluate(&ModelConfig::default());
    let (resolved_a, result_a) = outcome.a.evaluation().unwrap();
    let (_, result_b) = outcome.b.evaluation().unwrap();

    let csv = breakdown_csv([
        (SlotId::A.label(), result_a),
        (SlotId::B.label(), result_b),
    ]);
    assert_eq!(csv.lines().count(), 1 + 2 * 7);
    assert!(csv.lines().nth(8).unwrap().starts_with("Scenario B,Upstream leakage"));

    let export = ScenarioExport::now(SlotId::A.label(), resolved_a, result_a);
    let json = export.to_json_pretty().unwrap();
    assert!(json.contains("\"exported_at\""));
    assert!(json.contains("\"kind\": \"named\""));
}
