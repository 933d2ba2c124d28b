//! Calculation output structures

use serde::{Deserialize, Serialize};

/// Round to currency precision (2 decimal places).
///
/// Rounds the stored binary value, not `value * 100`: 500.005 is stored as
/// 500.00499999... and rounds down. Exact half cents round away from zero.
pub fn round_currency(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();

    // Whole cents below the value, corrected against the exact product
    let mut cents = (magnitude * 100.0).floor();
    while magnitude.mul_add(100.0, -cents) < 0.0 {
        cents -= 1.0;
    }
    while magnitude.mul_add(100.0, -(cents + 1.0)) >= 0.0 {
        cents += 1.0;
    }

    // Sign of (200 * magnitude - (2 * cents + 1)) decides against the half-cent midpoint
    if magnitude.mul_add(200.0, -(2.0 * cents + 1.0)) >= 0.0 {
        cents += 1.0;
    }

    (cents / 100.0).copysign(value)
}

/// Owed (past-due) installments within the prescription window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwedInstallments {
    /// Corrected sum of monthly and year-end installments, `None` without a usable DIB
    pub total: Option<f64>,

    /// Monthly installments counted, capped at the prescription window
    pub months: u32,
}

impl OwedInstallments {
    /// No usable benefit-start date: nothing to project
    pub fn skipped() -> Self {
        Self { total: None, months: 0 }
    }
}

/// Claim value for one set of inputs
///
/// Serialized with the field names the surrounding services exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Initial monthly benefit (RMI)
    pub rmi: f64,

    /// Owed installments, corrected to present value
    #[serde(rename = "vencidas")]
    pub owed: Option<f64>,

    /// Future installments (13 x RMI)
    #[serde(rename = "vincendas")]
    pub future: f64,

    /// owed + future; `None` exactly when `owed` is `None`
    pub total: Option<f64>,

    #[serde(rename = "mesesVencidos")]
    pub months_owed: u32,

    /// Benefit-start date exactly as received
    pub dib: Option<String>,
}

impl CalculationResult {
    /// Combine the components, rounding the total at output
    pub fn new(rmi: f64, owed: OwedInstallments, future: f64, dib: Option<String>) -> Self {
        let total = owed.total.map(|owed_total| round_currency(owed_total + future));
        Self {
            rmi,
            owed: owed.total,
            future,
            total,
            months_owed: owed.months,
            dib,
        }
    }
}
