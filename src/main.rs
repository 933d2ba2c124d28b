//! Claim Value CLI
//!
//! Computes the claim value for one claim and prints the text report (or JSON with --json)

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use claim_value::contribution::{load_claim, load_contributions, ClaimInput};
use claim_value::correction::DEFAULT_INDEX_PATH;
use claim_value::{render_report, CalculationConfig, ClaimCalculator};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "claim_value", author, version, about = "Estimate the value of a retroactive benefit claim", long_about = None)]
struct Args {
    /// Claim JSON file: {"contributions": [{"data": "MM/YYYY", "valor": n}], "dib": "..."}
    #[arg(short = 'c', long = "claim", required_unless_present = "contributions", conflicts_with = "contributions")]
    claim: Option<PathBuf>,

    /// CSV of contributions with month_year,amount columns
    #[arg(long = "contributions")]
    contributions: Option<PathBuf>,

    /// Benefit-start date (YYYY-MM-DD or DD/MM/YYYY); overrides the claim file's
    #[arg(short = 'd', long = "dib")]
    dib: Option<String>,

    /// Correction index (.json or .csv)
    #[arg(short = 'i', long = "index", default_value = DEFAULT_INDEX_PATH)]
    index: PathBuf,

    /// JSON file overriding the statutory parameters
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Calculate as of this date (YYYY-MM-DD) instead of today
    #[arg(long = "today")]
    today: Option<NaiveDate>,

    /// Print the result as JSON instead of the text report
    #[arg(long = "json")]
    json: bool,
}

fn load_input(args: &Args) -> Result<ClaimInput> {
    let mut claim = match (&args.claim, &args.contributions) {
        (Some(path), _) => load_claim(path)
            .with_context(|| format!("failed to read claim {}", path.display()))?,
        (None, Some(path)) => ClaimInput::new(
            load_contributions(path)
                .with_context(|| format!("failed to read contributions {}", path.display()))?,
            None,
        ),
        (None, None) => anyhow::bail!("either --claim or --contributions is required"),
    };

    if args.dib.is_some() {
        claim.dib = args.dib.clone();
    }
    Ok(claim)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CalculationConfig::from_json_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => CalculationConfig::default(),
    };

    let calculator = ClaimCalculator::from_index_path(&args.index, config)
        .with_context(|| format!("failed to load correction index {}", args.index.display()))?;

    let claim = load_input(&args)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    info!(
        "calculating {} contributions, DIB {:?}, as of {}",
        claim.contributions.len(),
        claim.dib,
        today
    );

    let result = calculator.calculate_claim(&claim, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_report(&result));
    }

    Ok(())
}
