//! Contribution records and claim input loading

mod data;
mod filter;
pub mod loader;

pub use data::Contribution;
pub use filter::{eligible_contributions, is_eligible};
pub use loader::{ClaimInput, load_claim, load_claims, load_contributions, load_contributions_from_reader};
