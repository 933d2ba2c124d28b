//! Statutory parameters for the claim value calculation

use crate::error::{ClaimError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Share of eligible contributions (largest first) kept for the average
pub const DEFAULT_RETENTION_RATIO: f64 = 0.8;

/// Replacement rate applied to the average contribution
pub const DEFAULT_REPLACEMENT_RATE: f64 = 0.5;

/// Five-year prescription limit, in monthly installments
pub const DEFAULT_PRESCRIPTION_MONTHS: u32 = 60;

/// Ordinary installments per year; each completed block earns one year-end bonus
pub const MONTHS_PER_BONUS_BLOCK: u32 = 12;

/// Prospective installments: twelve ordinary plus one year-end bonus
pub const FUTURE_INSTALLMENTS: u32 = 13;

/// Last day before currency-based contribution records (contributions must be after it)
pub fn default_contribution_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(1994, 3, 31).unwrap_or(NaiveDate::MIN)
}

/// Parameters of a calculation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Contributions dated on or before this day are ignored
    pub contribution_cutoff: NaiveDate,

    /// Fraction of eligible contributions (by count) used for the average
    pub retention_ratio: f64,

    /// Multiplier applied to the average to obtain the RMI
    pub replacement_rate: f64,

    /// Cap on the number of owed monthly installments
    pub prescription_months: u32,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            contribution_cutoff: default_contribution_cutoff(),
            retention_ratio: DEFAULT_RETENTION_RATIO,
            replacement_rate: DEFAULT_REPLACEMENT_RATE,
            prescription_months: DEFAULT_PRESCRIPTION_MONTHS,
        }
    }
}

impl CalculationConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that would put the RMI below zero or the owed
    /// months outside `[0, DEFAULT_PRESCRIPTION_MONTHS]`
    pub fn validate(&self) -> Result<()> {
        if self.prescription_months > DEFAULT_PRESCRIPTION_MONTHS {
            return Err(ClaimError::InvalidConfig(format!(
                "prescription_months {} exceeds {}",
                self.prescription_months, DEFAULT_PRESCRIPTION_MONTHS
            )));
        }
        if !self.retention_ratio.is_finite() || self.retention_ratio <= 0.0 || self.retention_ratio > 1.0 {
            return Err(ClaimError::InvalidConfig(format!(
                "retention_ratio {} must be in (0, 1]",
                self.retention_ratio
            )));
        }
        if !self.replacement_rate.is_finite() || self.replacement_rate < 0.0 {
            return Err(ClaimError::InvalidConfig(format!(
                "replacement_rate {} must be a non-negative number",
                self.replacement_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalculationConfig::default();
        assert_eq!(config.contribution_cutoff, NaiveDate::from_ymd_opt(1994, 3, 31).unwrap());
        assert_eq!(config.prescription_months, 60);
        assert!((config.retention_ratio - 0.8).abs() < 1e-12);
        assert!((config.replacement_rate - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_partial_override_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"prescription_months": 36, "contribution_cutoff": "2000-01-31"}}"#).unwrap();

        let config = CalculationConfig::from_json_path(file.path()).unwrap();
        assert_eq!(config.prescription_months, 36);
        assert_eq!(config.contribution_cutoff, NaiveDate::from_ymd_opt(2000, 1, 31).unwrap());
        assert!((config.replacement_rate - DEFAULT_REPLACEMENT_RATE).abs() < 1e-12);
    }

    fn load(json: &str) -> Result<CalculationConfig> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        CalculationConfig::from_json_path(file.path())
    }

    #[test]
    fn test_rejects_window_beyond_sixty_months() {
        let err = load(r#"{"prescription_months": 120}"#).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidConfig(_)));
        assert!(load(r#"{"prescription_months": 60}"#).is_ok());
        assert!(load(r#"{"prescription_months": 0}"#).is_ok());
    }

    #[test]
    fn test_rejects_negative_replacement_rate() {
        let err = load(r#"{"replacement_rate": -0.5}"#).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidConfig(_)));
        assert!(load(r#"{"replacement_rate": 0.0}"#).is_ok());
    }

    #[test]
    fn test_rejects_retention_ratio_out_of_range() {
        for json in [r#"{"retention_ratio": 0.0}"#, r#"{"retention_ratio": -0.2}"#, r#"{"retention_ratio": 1.5}"#] {
            assert!(matches!(load(json), Err(ClaimError::InvalidConfig(_))), "{json}");
        }
        assert!(load(r#"{"retention_ratio": 1.0}"#).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_rates() {
        let config = CalculationConfig {
            replacement_rate: f64::INFINITY,
            ..CalculationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ClaimError::InvalidConfig(_))));

        let config = CalculationConfig {
            retention_ratio: f64::NAN,
            ..CalculationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ClaimError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(CalculationConfig::default().validate().is_ok());
    }
}
