//! Per-student descriptive summary.
//!
//! The stat strip shown beside a student's chart: central tendency, spread,
//! best and worst years, and the overall direction of travel from the first
//! recorded year to the last.

use crate::core::MarksSeries;
use crate::stats;

/// Direction of a change in marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Increased,
    Decreased,
    Steady,
}

impl ChangeDirection {
    /// Classify a finite delta. Zero is `Steady`.
    pub fn classify(delta: f64) -> Self {
        if delta > 0.0 {
            ChangeDirection::Increased
        } else if delta < 0.0 {
            ChangeDirection::Decreased
        } else {
            ChangeDirection::Steady
        }
    }
}

/// Descriptive statistics for one student's series.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub mean: f64,
    /// Sample standard deviation; NaN for a single observation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Year of the highest mark (earliest on ties).
    pub best_year: i32,
    /// Year of the lowest mark (earliest on ties).
    pub worst_year: i32,
    /// Last mark minus first mark.
    pub overall_change: f64,
    pub direction: ChangeDirection,
}

/// Summarize a student's series.
pub fn summarize(series: &MarksSeries) -> SeriesSummary {
    let marks = series.marks();
    let years = series.years();

    let mut best = 0;
    let mut worst = 0;
    for (i, &m) in marks.iter().enumerate() {
        if m > marks[best] {
            best = i;
        }
        if m < marks[worst] {
            worst = i;
        }
    }

    let overall_change = marks[marks.len() - 1] - marks[0];

    SeriesSummary {
        mean: stats::mean(marks),
        std_dev: stats::std_dev(marks),
        min: marks[worst],
        max: marks[best],
        best_year: years[best],
        worst_year: years[worst],
        overall_change,
        direction: ChangeDirection::classify(overall_change),
    }
}
