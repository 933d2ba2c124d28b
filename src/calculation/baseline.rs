//! Initial monthly benefit (RMI) from eligible contributions

use super::result::round_currency;
use crate::contribution::Contribution;
use log::debug;

/// Number of contributions kept for the average: `floor(count * retention_ratio)`,
/// never less than one when any contribution is available
pub fn retained_count(count: usize, retention_ratio: f64) -> usize {
    if count == 0 {
        return 0;
    }
    let retained = (count as f64 * retention_ratio).floor() as usize;
    retained.clamp(1, count)
}

/// Average of the largest contributions times the replacement rate, rounded to cents.
///
/// Expects contributions that already passed the eligibility filter. No
/// contributions gives an RMI of zero.
pub fn calculate_rmi(eligible: &[&Contribution], retention_ratio: f64, replacement_rate: f64) -> f64 {
    if eligible.is_empty() {
        return 0.0;
    }

    let mut amounts: Vec<f64> = eligible.iter().map(|c| c.amount).collect();
    amounts.sort_by(|a, b| b.total_cmp(a));

    let kept = retained_count(amounts.len(), retention_ratio);
    let average = amounts[..kept].iter().sum::<f64>() / kept as f64;
    let rmi = round_currency(average * replacement_rate);

    debug!(
        "RMI {:.2} from top {} of {} contributions (average {:.2})",
        rmi,
        kept,
        amounts.len(),
        average
    );
    rmi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_REPLACEMENT_RATE, DEFAULT_RETENTION_RATIO};
    use approx::assert_abs_diff_eq;

    fn rmi_of(contributions: &[Contribution]) -> f64 {
        let refs: Vec<&Contribution> = contributions.iter().collect();
        calculate_rmi(&refs, DEFAULT_RETENTION_RATIO, DEFAULT_REPLACEMENT_RATE)
    }

    #[test]
    fn test_top_eighty_percent_average() {
        let contributions = vec![
            Contribution::new("03/1995", 1000.0),
            Contribution::new("04/1995", 2000.0),
            Contribution::new("05/1995", 3000.0),
            Contribution::new("06/1995", 4000.0),
            Contribution::new("07/1995", 5000.0),
        ];
        // Keeps 5000, 4000, 3000, 2000: mean 3500
        assert_abs_diff_eq!(rmi_of(&contributions), 1750.0, epsilon = 1e-9);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let contributions = vec![
            Contribution::new("07/1995", 5000.0),
            Contribution::new("03/1995", 1000.0),
            Contribution::new("06/1995", 4000.0),
            Contribution::new("04/1995", 2000.0),
            Contribution::new("05/1995", 3000.0),
        ];
        assert_abs_diff_eq!(rmi_of(&contributions), 1750.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(rmi_of(&[]), 0.0);
    }

    #[test]
    fn test_single_contribution_uses_itself() {
        let contributions = vec![Contribution::new("01/2000", 1500.0)];
        assert_abs_diff_eq!(rmi_of(&contributions), 750.0, epsilon = 1e-9);
    }

    #[test]
    fn test_half_cent_rmi_rounds_from_stored_value() {
        let contributions = vec![Contribution::new("01/2000", 1000.01)];
        assert_eq!(rmi_of(&contributions), 500.0);
    }

    #[test]
    fn test_retained_count() {
        assert_eq!(retained_count(0, 0.8), 0);
        assert_eq!(retained_count(1, 0.8), 1);
        assert_eq!(retained_count(2, 0.8), 1);
        assert_eq!(retained_count(5, 0.8), 4);
        assert_eq!(retained_count(10, 0.8), 8);
        assert_eq!(retained_count(11, 0.8), 8);
        assert_eq!(retained_count(3, 1.5), 3);
    }

    #[test]
    fn test_rmi_rounded_to_cents() {
        let contributions = vec![
            Contribution::new("01/2000", 1000.01),
            Contribution::new("02/2000", 1000.02),
            Contribution::new("03/2000", 1000.04),
            Contribution::new("04/2000", 1.0),
            Contribution::new("05/2000", 1.0),
        ];
        // Top 4: 1000.04, 1000.02, 1000.01, 1.0 -> mean 750.2675 -> 375.13375
        assert_abs_diff_eq!(rmi_of(&contributions), 375.13, epsilon = 1e-9);
    }
}
