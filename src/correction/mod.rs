//! Monetary correction index: month -> multiplier bringing a historical amount to present value

mod index;
pub mod loader;

pub use index::CorrectionIndex;
pub use loader::{DEFAULT_INDEX_PATH, load_index};
