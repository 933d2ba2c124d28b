//! Owed and future installment projections

use super::result::{round_currency, OwedInstallments};
use crate::config::{FUTURE_INSTALLMENTS, MONTHS_PER_BONUS_BLOCK};
use crate::correction::CorrectionIndex;
use crate::dates::{add_months, parse_dib, whole_months_between};
use chrono::NaiveDate;
use log::{debug, warn};

/// Walk the owed installments from the benefit-start date up to `today`.
///
/// Each month from the DIB onward contributes `rmi * factor(month)`, up to
/// `prescription_months` months. Every completed 12-month block adds one
/// year-end installment, corrected with the factor of the block's last month.
/// The sum is rounded to cents only at the end.
///
/// A missing or unparsable DIB is not an error: the result has no total and
/// zero months. A DIB after `today` owes nothing: zero months and a total of 0.00.
pub fn project_owed_installments(
    rmi: f64,
    dib: Option<&str>,
    today: NaiveDate,
    index: &CorrectionIndex,
    prescription_months: u32,
) -> OwedInstallments {
    let Some(raw) = dib else {
        return OwedInstallments::skipped();
    };
    let Some(start) = parse_dib(raw) else {
        warn!("benefit start date {:?} is not a recognised date; skipping owed installments", raw);
        return OwedInstallments::skipped();
    };

    if start > today {
        warn!("benefit start date {} is after {}; no installments owed", start, today);
    }

    let months_possible = whole_months_between(start, today);
    let months = months_possible.min(prescription_months);

    let monthly: f64 = (0..months)
        .map(|i| rmi * index.factor_for_date(add_months(start, i)))
        .sum();

    let bonus_blocks = months / MONTHS_PER_BONUS_BLOCK;
    let year_end: f64 = (0..bonus_blocks)
        .map(|block| {
            let reference = add_months(start, (block + 1) * MONTHS_PER_BONUS_BLOCK - 1);
            rmi * index.factor_for_date(reference)
        })
        .sum();

    debug!(
        "owed installments from {}: {} of {} possible months, {} year-end, monthly {:.2}, year-end {:.2}",
        start, months, months_possible, bonus_blocks, monthly, year_end
    );

    OwedInstallments {
        total: Some(round_currency(monthly + year_end)),
        months,
    }
}

/// Future installments: twelve ordinary plus one year-end, uncorrected
pub fn estimate_future_installments(rmi: f64) -> f64 {
    round_currency(rmi * FUTURE_INSTALLMENTS as f64)
}
