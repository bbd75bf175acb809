//! lngcorr command-line front end
//!
//! Evaluates the A/B scenario comparison described by a shareable query
//! string, writes the break-even heatmap and exports results.
//!
//! # Usage
//!
//! ```bash
//! lngcorr evaluate --state 'ab=WTWIRE&bg=20'
//! lngcorr heatmap --output heatmap.json
//! lngcorr export --slot b --format csv
//! lngcorr share --state 'aul=2.5'
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lngcorr_core::units::{coal_comparator_label, format_delta, format_number};
use lngcorr_corridor::calculator::ScenarioResult;
use lngcorr_corridor::config::ModelConfig;
use lngcorr_corridor::export::{breakdown_csv, ScenarioExport};
use lngcorr_corridor::scenario::{Comparison, ComparisonOutcome, SlotId};
use lngcorr_corridor::url_state::{decode_comparison, encode_comparison};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Full-chain emissions of maritime LNG corridors
#[derive(Parser, Debug)]
#[command(name = "lngcorr")]
#[command(about = "Well-to-wake and well-to-wire emissions of LNG shipping corridors")]
struct Args {
    /// TOML model configuration (constants, baseline, heatmap ranges)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Shareable query string describing scenarios A and B
    #[arg(short, long, global = true, default_value = "")]
    state: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print both scenarios and their difference
    Evaluate,
    /// Write the break-even heatmap of the selected slot as JSON
    Heatmap {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export evaluated scenarios
    Export {
        /// Slot to export; CSV exports both when omitted
        #[arg(long)]
        slot: Option<SlotId>,
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the canonical form of the query string
    Share,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum ExportFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ModelConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ModelConfig::default(),
    };
    let comparison = decode_comparison(&args.state, &Comparison::default());

    match args.command {
        Command::Evaluate => evaluate(&comparison, &config),
        Command::Heatmap { output } => heatmap(&comparison, &config, output.as_deref()),
        Command::Export {
            slot,
            format,
            output,
        } => export(&comparison, &config, slot, format, output.as_deref()),
        Command::Share => {
            println!("{}", encode_comparison(&comparison));
            Ok(())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => println!("{contents}"),
    }
    Ok(())
}

fn print_result(result: &ScenarioResult) {
    for entry in &result.breakdown {
        println!(
            "  {:<24} {:>12} {:>12}",
            entry.stage.label(),
            format_number(entry.co2_g, 0),
            format_number(entry.ch4_co2e_g, 0)
        );
    }
    println!("  {:<24} {:>12} g CO2e", "Total", format_number(result.total_co2e_g, 0));
    println!(
        "  {:<24} {:>12} %",
        "Shipping share",
        format_number(result.shipping_share_pct, 1)
    );
    if let Some(g_per_kwh) = result.g_per_kwh {
        println!("  {:<24} {:>12} g/kWh", "Intensity", format_number(g_per_kwh, 0));
    }
    println!(
        "  {:<24} {:>12}",
        coal_comparator_label(),
        format_delta(result.delta_vs_coal_g_per_kwh, 0)
    );
    match result.beats_coal() {
        Some(true) => println!("  Below the coal baseline"),
        Some(false) => println!("  At or above the coal baseline"),
        None => {}
    }
}

fn evaluate(comparison: &Comparison, config: &ModelConfig) -> Result<()> {
    let outcome = comparison.evaluate(config);

    for slot in SlotId::ALL {
        let state = comparison.slot(slot);
        println!(
            "{} [{} {}, {}]",
            slot.label(),
            state.boundary,
            state.gwp_horizon.factor().label,
            state.corridor_id
        );
        println!("  {:<24} {:>12} {:>12}", "Stage", "CO2 g", "CH4 g CO2e");
        match &outcome.slot(slot).result {
            Ok(result) => print_result(result),
            Err(e) => println!("  error: {e}"),
        }
        println!();
    }

    if let Some(diff) = outcome.diff() {
        println!("A − B");
        println!("  {:<24} {:>12} g CO2e", "Total", format_number(diff.total_co2e_g, 0));
        println!(
            "  {:<24} {:>12} pp",
            "Shipping share",
            format_number(diff.shipping_share_pct, 1)
        );
        println!(
            "  {:<24} {:>12}",
            coal_comparator_label(),
            format_delta(diff.delta_vs_coal_g_per_kwh, 0)
        );
    }
    Ok(())
}

fn heatmap_document(outcome: &ComparisonOutcome) -> Result<serde_json::Value> {
    let grid = outcome
        .heatmap
        .as_ref()
        .map_err(|e| anyhow!("Heatmap for slot {} failed: {e}", outcome.surface_from))?;
    let range = grid.colour_range();
    let markers: Vec<_> = outcome
        .markers()
        .into_iter()
        .map(|m| {
            json!({
                "slot": m.slot.code(),
                "leakage_pct": m.leakage_pct,
                "slip_pct": m.slip_pct,
                "x": m.position.x,
                "y": m.position.y,
            })
        })
        .collect();

    Ok(json!({
        "surface_from": outcome.surface_from.code(),
        "gwp": grid.gwp_label,
        "coal_baseline_g_per_kwh": grid.coal_baseline_g_per_kwh,
        "leakage_pct": grid.leakage.values().collect::<Vec<_>>(),
        "slip_pct": grid.slip.values().collect::<Vec<_>>(),
        "delta_vs_coal_g_per_kwh": grid.to_rows(),
        "colour_range": [range.min, range.max],
        "cells_below_coal": grid.cells_below_coal(),
        "markers": markers,
    }))
}

fn heatmap(comparison: &Comparison, config: &ModelConfig, output: Option<&Path>) -> Result<()> {
    let outcome = comparison.evaluate(config);
    let document = heatmap_document(&outcome)?;
    write_output(output, &serde_json::to_string_pretty(&document)?)
}

fn export(
    comparison: &Comparison,
    config: &ModelConfig,
    slot: Option<SlotId>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let outcome = comparison.evaluate(config);
    let slots = match (slot, format) {
        (Some(slot), _) => vec![slot],
        (None, ExportFormat::Csv) => SlotId::ALL.to_vec(),
        (None, ExportFormat::Json) => vec![SlotId::A],
    };

    let mut evaluated = Vec::with_capacity(slots.len());
    for slot in slots {
        let slot_outcome = outcome.slot(slot);
        let (resolved, result) = match (&slot_outcome.resolved, &slot_outcome.result) {
            (Ok(resolved), Ok(result)) => (resolved, result),
            (Err(e), _) | (_, Err(e)) => bail!("{} cannot be exported: {e}", slot.label()),
        };
        evaluated.push((slot, resolved, result));
    }

    let contents = match format {
        ExportFormat::Json => {
            let [(slot, resolved, result)] = evaluated.as_slice() else {
                bail!("JSON export takes exactly one slot");
            };
            ScenarioExport::now(slot.label(), resolved, result).to_json_pretty()?
        }
        ExportFormat::Csv => breakdown_csv(
            evaluated
                .iter()
                .map(|(slot, _, result)| (slot.label(), *result)),
        ),
    };

    info!(format = ?format, "Exported scenario breakdown");
    write_output(output, &contents)
}
