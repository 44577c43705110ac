//! Core data structures for marks series analysis.

mod record;
mod series;

pub use record::{MarksDataset, MarksRecord, YEAR_RANGE};
pub use series::MarksSeries;
