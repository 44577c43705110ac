//! The marks transform pipeline.
//!
//! One call derives all four columns for a student's series: detrended
//! marks, smoothed marks, year-over-year change of the smoothed marks, and
//! peak flags on the smoothed marks.

use crate::core::MarksSeries;
use crate::error::Result;
use crate::stats;

use super::detrend::detrend;
use super::difference::difference;
use super::peaks::find_peaks;
use super::smooth::{savgol_filter, smoothing_window, MAX_WINDOW, POLY_ORDER};

/// Tunables for the transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// Largest smoothing window the selection policy may choose.
    pub max_window: usize,
    /// Polynomial order of the smoothing filter.
    pub poly_order: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_window: MAX_WINDOW,
            poly_order: POLY_ORDER,
        }
    }
}

/// The four derived series, index-aligned with the input marks.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Marks with the best-fit linear trend removed.
    pub detrended: Vec<f64>,
    /// Polynomial-smoothed marks.
    pub smoothed: Vec<f64>,
    /// First difference of the smoothed marks; index 0 is the NaN sentinel.
    pub change: Vec<f64>,
    /// Peak flag per index, on the smoothed marks.
    pub is_peak: Vec<bool>,
}

impl TransformResult {
    /// Number of observations in each derived column.
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }

    /// Indices flagged as peaks.
    pub fn peak_indices(&self) -> Vec<usize> {
        self.is_peak
            .iter()
            .enumerate()
            .filter(|(_, &flag)| flag)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Run the full pipeline over one student's series.
///
/// Detrended and smoothed marks are computed from the raw series; the
/// change column is the first difference of the smoothed marks, and peaks
/// are local maxima of the smoothed marks at or above their mean.
pub fn transform(series: &MarksSeries, config: &TransformConfig) -> Result<TransformResult> {
    let marks = series.marks();

    let window = smoothing_window(marks.len(), config.max_window, config.poly_order)?;
    let smoothed = savgol_filter(marks, window, config.poly_order)?;
    let detrended = detrend(marks);
    let change = difference(&smoothed);

    let threshold = stats::mean(&smoothed);
    let mut is_peak = vec![false; marks.len()];
    for idx in find_peaks(&smoothed, threshold) {
        is_peak[idx] = true;
    }

    Ok(TransformResult {
        detrended,
        smoothed,
        change,
        is_peak,
    })
}

/// Run the pipeline with the default configuration.
pub fn transform_auto(series: &MarksSeries) -> Result<TransformResult> {
    transform(series, &TransformConfig::default())
}
