//! Eligibility filter for the baseline calculation

use super::Contribution;
use chrono::NaiveDate;
use log::debug;

/// A contribution counts towards the RMI when its month is a valid calendar
/// month strictly after `cutoff` and its amount is a positive number
pub fn is_eligible(contribution: &Contribution, cutoff: NaiveDate) -> bool {
    let after_cutoff = contribution
        .month_key()
        .and_then(|key| key.first_day())
        .is_some_and(|first_day| first_day > cutoff);

    after_cutoff && contribution.amount.is_finite() && contribution.amount > 0.0
}

/// Contributions eligible for the RMI; the rest are dropped without error
pub fn eligible_contributions(contributions: &[Contribution], cutoff: NaiveDate) -> Vec<&Contribution> {
    let eligible: Vec<&Contribution> = contributions
        .iter()
        .filter(|c| {
            let keep = is_eligible(c, cutoff);
            if !keep {
                debug!("dropping contribution {} = {}", c.month_year, c.amount);
            }
            keep
        })
        .collect();

    debug!(
        "{} of {} contributions eligible (cutoff {})",
        eligible.len(),
        contributions.len(),
        cutoff
    );
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_contribution_cutoff;

    #[test]
    fn test_cutoff_is_exclusive_of_march_1994() {
        let cutoff = default_contribution_cutoff();
        assert!(!is_eligible(&Contribution::new("02/1994", 100.0), cutoff));
        assert!(!is_eligible(&Contribution::new("03/1994", 100.0), cutoff));
        assert!(is_eligible(&Contribution::new("04/1994", 100.0), cutoff));
    }

    #[test]
    fn test_rejects_bad_amounts() {
        let cutoff = default_contribution_cutoff();
        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(!is_eligible(&Contribution::new("05/2000", amount), cutoff), "{amount}");
        }
    }

    #[test]
    fn test_rejects_bad_months() {
        let cutoff = default_contribution_cutoff();
        for month in ["13/2000", "2000-05", "", "05/00"] {
            assert!(!is_eligible(&Contribution::new(month, 100.0), cutoff), "{month}");
        }
    }

    #[test]
    fn test_filter_keeps_order_and_drops_silently() {
        let contributions = vec![
            Contribution::new("02/1994", 9000.0),
            Contribution::new("03/1995", 1000.0),
            Contribution::new("bad", 1000.0),
            Contribution::new("04/1995", 2000.0),
        ];
        let eligible = eligible_contributions(&contributions, default_contribution_cutoff());
        let months: Vec<&str> = eligible.iter().map(|c| c.month_year.as_str()).collect();
        assert_eq!(months, vec!["03/1995", "04/1995"]);
    }

    #[test]
    fn test_all_dropped_is_empty_not_error() {
        let contributions = vec![Contribution::new("01/1990", 500.0)];
        assert!(eligible_contributions(&contributions, default_contribution_cutoff()).is_empty());
    }
}
