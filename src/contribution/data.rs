//! Contribution record as delivered by the document extraction step

use crate::dates::MonthKey;
use serde::{Deserialize, Deserializer, Serialize};

/// One monthly contribution: the month it refers to and the amount paid
///
/// The month is kept as delivered; validation happens in the eligibility
/// filter so a malformed record is dropped instead of failing the claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Reference month, `MM/YYYY`
    #[serde(rename = "data", alias = "monthYear", alias = "month_year")]
    pub month_year: String,

    /// Amount paid. Non-numeric input is carried as NaN and filtered out later.
    #[serde(
        rename = "valor",
        alias = "amount",
        default = "missing_amount",
        deserialize_with = "lenient_amount"
    )]
    pub amount: f64,
}

impl Contribution {
    pub fn new(month_year: impl Into<String>, amount: f64) -> Self {
        Self {
            month_year: month_year.into(),
            amount,
        }
    }

    /// Parsed reference month, if well formed
    pub fn month_key(&self) -> Option<MonthKey> {
        self.month_year.parse().ok()
    }
}

fn missing_amount() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Other(serde::de::IgnoredAny),
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => value,
        RawAmount::Other(_) => f64::NAN,
    })
}
