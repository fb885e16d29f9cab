//! Appraisal Engine CLI
//!
//! Command-line interface for appraising yearly benefit/cost projections

use anyhow::{Context, Result};
use appraisal_engine::calculation::{calculate, yearly_rows, CalculationResult};
use appraisal_engine::flows::{load_cases, load_flows};
use appraisal_engine::{BatchRunner, RunConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Investment appraisal metrics (NPV, BCR, IRR, SROI, payback) for yearly projections.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Appraise a single project from a Year,Benefits,Costs CSV file.
    Calculate(CalculateArgs),
    /// Appraise every case in a JSON file in parallel.
    Batch(BatchArgs),
}

#[derive(Parser)]
struct CalculateArgs {
    /// CSV file with Year,Benefits,Costs columns.
    #[arg(long)]
    flows: PathBuf,

    /// Discount rate as a decimal (e.g. 0.035). Defaults to $DISCOUNT_RATE or 3.5%.
    #[arg(long)]
    rate: Option<f64>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Write Year,Net,Cumulative rows to this CSV file.
    #[arg(long)]
    csv_out: Option<PathBuf>,
}

#[derive(Parser)]
struct BatchArgs {
    /// JSON array of {caseId, flows, discountRate} objects.
    #[arg(long)]
    cases: PathBuf,

    /// Print the results as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseOutput<'a> {
    case_id: &'a str,
    result: &'a CalculationResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = RunConfig::from_env();

    match cli.command {
        Commands::Calculate(args) => handle_calculate(args, config),
        Commands::Batch(args) => handle_batch(args, config),
    }
}

fn handle_calculate(args: CalculateArgs, config: RunConfig) -> Result<()> {
    let config = config.with_overrides(args.rate, args.json);

    let input = load_flows(&args.flows, config.discount_rate)
        .with_context(|| format!("Failed to load flows from {}", args.flows.display()))?;
    let result = calculate(&input);
    let rows = yearly_rows(&input, &result);

    if let Some(path) = &args.csv_out {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("Wrote {} rows to {}", rows.len(), path.display());
    }

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Appraisal ({} years at {:.2}% discount rate)", result.years(), config.discount_rate * 100.0);
    println!("{}", "=".repeat(48));
    println!("  PV Benefits:    {:>14.2}", result.pv_benefits);
    println!("  PV Costs:       {:>14.2}", result.pv_costs);
    println!("  NPV:            {:>14.2}", result.npv);
    println!("  Total net:      {:>14.2}", result.total_net());
    println!("  BCR:            {:>14.4}", result.bcr);
    println!("  SROI:           {:>14.4}", result.sroi);
    println!("  IRR:            {:>14}", format_pct(result.irr));
    println!("  Payback (yrs):  {:>14}", format_years(result.payback_years));
    println!();

    println!("{:>6} {:>14} {:>14}", "Year", "Net", "Cumulative");
    println!("{}", "-".repeat(36));
    for row in &rows {
        println!("{:>6} {:>14.2} {:>14.2}", row.year, row.net, row.cumulative);
    }

    Ok(())
}

fn handle_batch(args: BatchArgs, config: RunConfig) -> Result<()> {
    let config = config.with_overrides(None, args.json);

    let cases = load_cases(&args.cases)
        .with_context(|| format!("Failed to load cases from {}", args.cases.display()))?;
    let runner = BatchRunner::new(cases);
    let results = runner.run();

    if config.json_output {
        let output: Vec<CaseOutput> = results
            .iter()
            .map(|(case_id, result)| CaseOutput { case_id, result })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{:<24} {:>14} {:>10} {:>10} {:>10} {:>10}", "Case", "NPV", "BCR", "SROI", "IRR", "Payback");
    println!("{}", "-".repeat(83));
    for (case_id, result) in &results {
        println!(
            "{:<24} {:>14.2} {:>10.4} {:>10.4} {:>10} {:>10}",
            case_id,
            result.npv,
            result.bcr,
            result.sroi,
            format_pct(result.irr),
            format_years(result.payback_years),
        );
    }

    Ok(())
}

fn format_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0))
}

fn format_years(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}
