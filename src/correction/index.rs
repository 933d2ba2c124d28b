//! Immutable month-indexed correction table

use crate::dates::MonthKey;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Multiplier used for months the table does not cover
pub const NO_CORRECTION: f64 = 1.0;

/// Correction multipliers keyed by calendar month
///
/// Built once (from a file or in memory) and never modified afterwards; the
/// calculator only reads from it, so one index can back any number of
/// calculations, including parallel ones.
#[derive(Debug, Clone, Default)]
pub struct CorrectionIndex {
    factors: BTreeMap<MonthKey, f64>,
}

impl CorrectionIndex {
    /// Create from already validated entries
    pub fn new(factors: BTreeMap<MonthKey, f64>) -> Self {
        Self { factors }
    }

    /// Create from (month, factor) pairs; later duplicates win
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MonthKey, f64)>,
    {
        Self {
            factors: entries.into_iter().collect(),
        }
    }

    /// Index with no entries: every lookup yields `NO_CORRECTION`
    pub fn identity() -> Self {
        Self::default()
    }

    /// Multiplier for a month, `NO_CORRECTION` when absent
    pub fn factor(&self, month: MonthKey) -> f64 {
        match self.factors.get(&month) {
            Some(&factor) => factor,
            None => {
                debug!("no correction factor for {}, using {}", month, NO_CORRECTION);
                NO_CORRECTION
            }
        }
    }

    /// Multiplier for the month containing `date`
    pub fn factor_for_date(&self, date: NaiveDate) -> f64 {
        self.factor(MonthKey::from_date(date))
    }

    /// Raw entry, without the default
    pub fn get(&self, month: MonthKey) -> Option<f64> {
        self.factors.get(&month).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// First and last months covered
    pub fn range(&self) -> Option<(MonthKey, MonthKey)> {
        let first = self.factors.keys().next()?;
        let last = self.factors.keys().next_back()?;
        Some((*first, *last))
    }
}
