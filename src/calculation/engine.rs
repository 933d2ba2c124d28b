//! Claim value calculator: filter -> RMI -> owed / future installments -> totals

use super::baseline::calculate_rmi;
use super::installments::{estimate_future_installments, project_owed_installments};
use super::result::CalculationResult;
use crate::config::CalculationConfig;
use crate::contribution::{eligible_contributions, ClaimInput, Contribution};
use crate::correction::CorrectionIndex;
use crate::error::Result;
use chrono::{Local, NaiveDate};
use std::path::Path;

/// Calculator bound to one correction index and one set of parameters
///
/// Both are fixed at construction; `calculate` is a pure function of its
/// arguments, so a single calculator can be shared across threads.
#[derive(Debug, Clone)]
pub struct ClaimCalculator {
    index: CorrectionIndex,
    config: CalculationConfig,
}

impl ClaimCalculator {
    /// Create a calculator with the default statutory parameters
    pub fn new(index: CorrectionIndex) -> Self {
        Self::with_config(index, CalculationConfig::default())
    }

    pub fn with_config(index: CorrectionIndex, config: CalculationConfig) -> Self {
        Self { index, config }
    }

    /// Create a calculator by loading the correction index from a file.
    /// Fails if the index is missing or malformed, or the config is invalid.
    pub fn from_index_path(path: &Path, config: CalculationConfig) -> Result<Self> {
        config.validate()?;
        let index = crate::correction::load_index(path)?;
        Ok(Self::with_config(index, config))
    }

    /// Compute the claim value as of `today`
    pub fn calculate(&self, contributions: &[Contribution], dib: Option<&str>, today: NaiveDate) -> CalculationResult {
        let eligible = eligible_contributions(contributions, self.config.contribution_cutoff);
        let rmi = calculate_rmi(&eligible, self.config.retention_ratio, self.config.replacement_rate);

        let owed = project_owed_installments(
            rmi,
            dib,
            today,
            &self.index,
            self.config.prescription_months,
        );
        let future = estimate_future_installments(rmi);

        CalculationResult::new(rmi, owed, future, dib.map(str::to_string))
    }

    /// Compute the claim value as of the local system date
    pub fn calculate_today(&self, contributions: &[Contribution], dib: Option<&str>) -> CalculationResult {
        self.calculate(contributions, dib, Local::now().date_naive())
    }

    /// Compute the claim value for a loaded claim
    pub fn calculate_claim(&self, claim: &ClaimInput, today: NaiveDate) -> CalculationResult {
        self.calculate(&claim.contributions, claim.dib.as_deref(), today)
    }

    pub fn index(&self) -> &CorrectionIndex {
        &self.index
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }
}
