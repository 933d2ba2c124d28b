//! Error type for loading claim data and correction tables
//!
//! Calculation itself never fails; only reading inputs from disk does.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClaimError>;

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid month key: {0:?} (expected MM/YYYY)")]
    InvalidMonthKey(String),

    #[error("invalid correction factor for {key}: {value}")]
    InvalidFactor { key: String, value: String },

    #[error("correction index at {0} has no entries")]
    EmptyIndex(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
}
