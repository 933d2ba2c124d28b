//! Load claims and contribution lists from JSON or CSV

use super::Contribution;
use crate::error::Result;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The two inputs of a calculation as handed over by the extraction step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimInput {
    /// Caller-side identifier, echoed in batch output
    #[serde(default, alias = "claim_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub contributions: Vec<Contribution>,

    /// Benefit-start date as typed or extracted (ISO or day-first)
    #[serde(default, alias = "DIB")]
    pub dib: Option<String>,
}

impl ClaimInput {
    pub fn new(contributions: Vec<Contribution>, dib: Option<&str>) -> Self {
        Self {
            id: None,
            contributions,
            dib: dib.map(str::to_string),
        }
    }
}

/// Load a single claim from a JSON file
pub fn load_claim<P: AsRef<Path>>(path: P) -> Result<ClaimInput> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Load a JSON array of claims
pub fn load_claims<P: AsRef<Path>>(path: P) -> Result<Vec<ClaimInput>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Raw CSV row: `month_year,amount`
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "data")]
    month_year: String,
    #[serde(alias = "valor")]
    amount: String,
}

impl CsvRow {
    fn into_contribution(self) -> Contribution {
        // Unparsable amounts are left for the eligibility filter to drop
        let amount = self.amount.trim().parse().unwrap_or(f64::NAN);
        Contribution::new(self.month_year.trim(), amount)
    }
}

/// Load contributions from a CSV file
pub fn load_contributions<P: AsRef<Path>>(path: P) -> Result<Vec<Contribution>> {
    let file = File::open(path)?;
    load_contributions_from_reader(file)
}

/// Load contributions from any reader (e.g., string buffer, stdin)
pub fn load_contributions_from_reader<R: Read>(reader: R) -> Result<Vec<Contribution>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut contributions = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        contributions.push(row.into_contribution());
    }

    Ok(contributions)
}
