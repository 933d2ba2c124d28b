//! Claim Value - estimation engine for retroactive social-security benefit claims
//!
//! This library provides:
//! - Contribution eligibility filtering and RMI (initial monthly benefit) derivation
//! - Owed installments over the five-year prescription window, corrected by a monthly index
//! - Future installments (12 ordinary + 1 year-end) and claim totals
//! - A fixed-layout text report of the result
//! - Batch evaluation of many claims against one pre-loaded correction index

pub mod batch;
pub mod calculation;
pub mod config;
pub mod contribution;
pub mod correction;
pub mod dates;
pub mod error;

// Re-export commonly used types
pub use batch::ClaimRunner;
pub use calculation::{render_report, CalculationResult, ClaimCalculator};
pub use config::CalculationConfig;
pub use contribution::{ClaimInput, Contribution};
pub use correction::CorrectionIndex;
pub use error::{ClaimError, Result};
