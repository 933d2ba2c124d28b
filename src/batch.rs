//! Batch runner for evaluating many claims against one correction index
//!
//! Loads the index once, then evaluates independent claims in parallel.

use crate::calculation::{CalculationResult, ClaimCalculator};
use crate::config::CalculationConfig;
use crate::contribution::ClaimInput;
use crate::error::Result;
use chrono::NaiveDate;
use rayon::prelude::*;
use std::path::Path;

/// Pre-loaded runner for batch claim evaluation
///
/// # Example
/// ```ignore
/// let runner = ClaimRunner::from_index_path(Path::new("data/correction_index.json"), CalculationConfig::default())?;
/// let results = runner.run_batch(&claims, today);
/// ```
#[derive(Debug, Clone)]
pub struct ClaimRunner {
    calculator: ClaimCalculator,
}

impl ClaimRunner {
    pub fn new(calculator: ClaimCalculator) -> Self {
        Self { calculator }
    }

    /// Create runner by loading the correction index from a file
    pub fn from_index_path(path: &Path, config: CalculationConfig) -> Result<Self> {
        Ok(Self {
            calculator: ClaimCalculator::from_index_path(path, config)?,
        })
    }

    /// Evaluate a single claim
    pub fn run(&self, claim: &ClaimInput, today: NaiveDate) -> CalculationResult {
        self.calculator.calculate_claim(claim, today)
    }

    /// Evaluate many claims in parallel; results keep the input order
    pub fn run_batch(&self, claims: &[ClaimInput], today: NaiveDate) -> Vec<CalculationResult> {
        claims
            .par_iter()
            .map(|claim| self.calculator.calculate_claim(claim, today))
            .collect()
    }

    pub fn calculator(&self) -> &ClaimCalculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contribution::Contribution;
    use crate::correction::CorrectionIndex;

    fn claim(amount: f64, dib: Option<&str>) -> ClaimInput {
        ClaimInput::new(vec![Contribution::new("01/2010", amount)], dib)
    }

    #[test]
    fn test_batch_matches_single_runs_in_order() {
        let runner = ClaimRunner::new(ClaimCalculator::new(CorrectionIndex::identity()));
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        let claims: Vec<ClaimInput> = (1..=50)
            .map(|i| claim(100.0 * i as f64, if i % 3 == 0 { None } else { Some("2022-02-01") }))
            .collect();

        let batch = runner.run_batch(&claims, today);
        assert_eq!(batch.len(), claims.len());
        for (claim, result) in claims.iter().zip(&batch) {
            assert_eq!(*result, runner.run(claim, today));
        }

        // rmi = amount / 2, so ordering is visible in the results
        assert!((batch[0].rmi - 50.0).abs() < 1e-9);
        assert!((batch[49].rmi - 2500.0).abs() < 1e-9);
        assert!(batch[2].total.is_none());
    }
}
