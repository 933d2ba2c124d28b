//! Text summary of a calculation, in the layout used by the claim petitions

use super::result::CalculationResult;

/// Placeholder for figures that could not be computed (no usable DIB)
pub const NOT_COMPUTED: &str = "não apurado";

fn money(value: f64) -> String {
    format!("R$ {:.2}", value)
}

fn optional_money(value: Option<f64>) -> String {
    value.map(money).unwrap_or_else(|| NOT_COMPUTED.to_string())
}

/// Four labelled lines: RMI, owed installments, future installments, total
///
/// Without a usable DIB the owed and total lines depart from the fixed
/// template: they read `não apurado` with no `R$` prefix.
pub fn render_report(result: &CalculationResult) -> String {
    format!(
        "✅ RMI: {}\n📆 Parcelas vencidas: {}\n📆 Parcelas vincendas (13 x RMI): {}\n💰 Valor total da causa: {}",
        money(result.rmi),
        optional_money(result.owed),
        money(result.future),
        optional_money(result.total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::result::OwedInstallments;

    #[test]
    fn test_report_layout() {
        let result = CalculationResult::new(
            1750.0,
            OwedInstallments { total: Some(113_750.5), months: 60 },
            22_750.0,
            Some("2020-01-15".to_string()),
        );

        let expected = "✅ RMI: R$ 1750.00\n\
                        📆 Parcelas vencidas: R$ 113750.50\n\
                        📆 Parcelas vincendas (13 x RMI): R$ 22750.00\n\
                        💰 Valor total da causa: R$ 136500.50";
        assert_eq!(render_report(&result), expected);
    }

    #[test]
    fn test_report_without_dib() {
        let result = CalculationResult::new(100.0, OwedInstallments::skipped(), 1300.0, None);
        let report = render_report(&result);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "📆 Parcelas vencidas: não apurado");
        assert_eq!(lines[2], "📆 Parcelas vincendas (13 x RMI): R$ 1300.00");
        assert_eq!(lines[3], "💰 Valor total da causa: não apurado");
    }
}
