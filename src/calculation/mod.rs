//! Claim value calculation: RMI, owed and future installments, totals and report

mod baseline;
mod engine;
mod installments;
mod report;
mod result;

pub use baseline::{calculate_rmi, retained_count};
pub use engine::ClaimCalculator;
pub use installments::{estimate_future_installments, project_owed_installments};
pub use report::{render_report, NOT_COMPUTED};
pub use result::{round_currency, CalculationResult, OwedInstallments};
