//! Correction index loader
//!
//! Two layouts are accepted, chosen by file extension:
//! - `.json`: an object `{"MM/YYYY": factor, ...}`
//! - `.csv`: rows of `month,factor` with a header line
//!
//! Any malformed key or non-positive factor rejects the whole file.

use super::CorrectionIndex;
use crate::dates::MonthKey;
use crate::error::{ClaimError, Result};
use log::info;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default location of the correction table
pub const DEFAULT_INDEX_PATH: &str = "data/correction_index.json";

/// Load the correction index from `path`
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<CorrectionIndex> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let file = File::open(path)?;
    let factors = match extension.as_deref() {
        Some("json") => read_json(BufReader::new(file))?,
        Some("csv") => read_csv(file)?,
        _ => return Err(ClaimError::UnsupportedFormat(path.to_path_buf())),
    };

    if factors.is_empty() {
        return Err(ClaimError::EmptyIndex(path.to_path_buf()));
    }

    let index = CorrectionIndex::new(factors);
    if let Some((first, last)) = index.range() {
        info!(
            "loaded {} correction factors ({} to {}) from {}",
            index.len(),
            first,
            last,
            path.display()
        );
    }
    Ok(index)
}

/// Parse the JSON object layout
pub fn read_json<R: Read>(reader: R) -> Result<BTreeMap<MonthKey, f64>> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_reader(reader)?;
    let mut factors = BTreeMap::new();

    for (key, value) in raw {
        let factor = value.as_f64().ok_or_else(|| ClaimError::InvalidFactor {
            key: key.clone(),
            value: value.to_string(),
        })?;
        insert_factor(&mut factors, &key, factor)?;
    }

    Ok(factors)
}

/// Parse the CSV `month,factor` layout
pub fn read_csv<R: Read>(reader: R) -> Result<BTreeMap<MonthKey, f64>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut factors = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or_default().trim();
        let raw_factor = record.get(1).unwrap_or_default().trim();
        let factor: f64 = raw_factor.parse().map_err(|_| ClaimError::InvalidFactor {
            key: key.to_string(),
            value: raw_factor.to_string(),
        })?;
        insert_factor(&mut factors, key, factor)?;
    }

    Ok(factors)
}

fn insert_factor(factors: &mut BTreeMap<MonthKey, f64>, key: &str, factor: f64) -> Result<()> {
    let month: MonthKey = key.parse()?;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ClaimError::InvalidFactor {
            key: key.to_string(),
            value: factor.to_string(),
        });
    }
    factors.insert(month, factor);
    Ok(())
}
