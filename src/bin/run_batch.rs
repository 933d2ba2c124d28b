//! Evaluate a JSON array of claims against one correction index
//!
//! Writes one CSV row per claim, in input order

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use claim_value::contribution::load_claims;
use claim_value::correction::DEFAULT_INDEX_PATH;
use claim_value::{CalculationConfig, ClaimRunner};
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", author, version, about = "Calculate claim values for a batch of claims", long_about = None)]
struct Args {
    /// JSON array of claims
    #[arg(short = 'c', long = "claims")]
    claims: PathBuf,

    /// Correction index (.json or .csv)
    #[arg(short = 'i', long = "index", default_value = DEFAULT_INDEX_PATH)]
    index: PathBuf,

    /// JSON file overriding the statutory parameters
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Calculate as of this date (YYYY-MM-DD) instead of today
    #[arg(long = "today")]
    today: Option<NaiveDate>,

    /// Output CSV
    #[arg(short = 'o', long = "output", default_value = "claim_values.csv")]
    output: PathBuf,
}

/// One output row; absent figures are written as empty cells
#[derive(Debug, Serialize)]
struct OutputRow {
    claim_id: String,
    rmi: String,
    vencidas: Option<String>,
    vincendas: String,
    total: Option<String>,
    meses_vencidos: u32,
    dib: Option<String>,
}

fn cents(value: f64) -> String {
    format!("{:.2}", value)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => CalculationConfig::from_json_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => CalculationConfig::default(),
    };

    let runner = ClaimRunner::from_index_path(&args.index, config)
        .with_context(|| format!("failed to load correction index {}", args.index.display()))?;

    let claims = load_claims(&args.claims)
        .with_context(|| format!("failed to read claims {}", args.claims.display()))?;
    info!("loaded {} claims in {:?}", claims.len(), start.elapsed());

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let results = runner.run_batch(&claims, today);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    for (position, (claim, result)) in claims.iter().zip(&results).enumerate() {
        writer.serialize(OutputRow {
            claim_id: claim.id.clone().unwrap_or_else(|| (position + 1).to_string()),
            rmi: cents(result.rmi),
            vencidas: result.owed.map(cents),
            vincendas: cents(result.future),
            total: result.total.map(cents),
            meses_vencidos: result.months_owed,
            dib: result.dib.clone(),
        })?;
    }
    writer.flush()?;

    let skipped = results.iter().filter(|r| r.total.is_none()).count();
    println!("Calculated {} claims as of {} ({} without a usable DIB)", results.len(), today, skipped);
    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
