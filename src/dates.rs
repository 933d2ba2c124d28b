//! Calendar helpers shared by the contribution filter and the installment projector
//!
//! - `MonthKey`: the `MM/YYYY` month used by contribution records and the correction index
//! - Benefit-start date (DIB) parsing over an ordered list of accepted formats
//! - Whole-month differences and month offsets with end-of-month clamping

use crate::error::ClaimError;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Accepted DIB formats, tried in order: ISO first, then day-first
pub const DIB_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// A calendar month, written `MM/YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Build a key, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl FromStr for MonthKey {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClaimError::InvalidMonthKey(s.to_string());
        let (month, year) = s.trim().split_once('/').ok_or_else(invalid)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if month.len() > 2 || year.len() != 4 || !all_digits(month) || !all_digits(year) {
            return Err(invalid());
        }

        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a benefit-start date, trying each of `DIB_FORMATS` in order.
/// Blank or unrecognised input yields `None`.
pub fn parse_dib(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DIB_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Date `months` calendar months after `date`, clamped to the end of shorter months
/// (31 Jan + 1 month = 28/29 Feb)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Number of whole calendar months elapsed from `start` to `end`.
///
/// This is the largest `n` for which `add_months(start, n)` is not after `end`,
/// so 15 Jan -> 14 Feb is 0 months and 15 Jan -> 15 Feb is 1. Returns 0 when
/// `end` is not after `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if span <= 0 {
        return 0;
    }

    let span = span as u32;
    if add_months(start, span) > end {
        span - 1
    } else {
        span
    }
}
