//! # marks-trends
//!
//! Academic marks time-series analysis.
//!
//! Takes one student's chronologically ordered marks and derives four
//! index-aligned columns: linear-trend residuals, polynomial-smoothed marks,
//! year-over-year change of the smoothed marks, and peak flags. CSV
//! ingestion and export bracket the pipeline so a caller can go from an
//! uploaded table to a downloadable file without any other plumbing.
//!
//! Every operation is a pure function of its inputs: one upload or student
//! selection triggers one full recomputation, and nothing is cached or
//! persisted between calls.

pub mod core;
pub mod error;
pub mod export;
pub mod ingest;
pub mod stats;
pub mod summary;
pub mod transform;

pub use error::{Result, TrendError};

pub mod prelude {
    pub use crate::core::{MarksDataset, MarksRecord, MarksSeries};
    pub use crate::error::{Result, TrendError};
    pub use crate::transform::{transform, transform_auto, TransformConfig, TransformResult};
}
