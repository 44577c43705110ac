//! Chronologically ordered marks series for a single student.

use crate::error::{Result, TrendError};

/// One student's marks across academic years, ordered ascending by year.
///
/// The two value vectors are parallel: `marks[i]` is the score obtained in
/// `years[i]`. Years must be strictly increasing but need not be contiguous;
/// a student may have gap years in the record.
#[derive(Debug, Clone, PartialEq)]
pub struct MarksSeries {
    student_id: String,
    student_name: String,
    years: Vec<i32>,
    marks: Vec<f64>,
}

impl MarksSeries {
    /// Create a validated series.
    ///
    /// Fails when the series is empty, the parallel vectors disagree in
    /// length, years are not strictly increasing, or any mark is non-finite.
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        years: Vec<i32>,
        marks: Vec<f64>,
    ) -> Result<Self> {
        let student_id = student_id.into();

        if years.is_empty() {
            return Err(TrendError::EmptyInput(format!(
                "no observations for student '{student_id}'"
            )));
        }
        if years.len() != marks.len() {
            return Err(TrendError::DimensionMismatch {
                expected: years.len(),
                got: marks.len(),
            });
        }
        for w in years.windows(2) {
            if w[1] <= w[0] {
                return Err(TrendError::Schema(format!(
                    "academic years must be strictly increasing for student '{student_id}': \
                     {} follows {}",
                    w[1], w[0]
                )));
            }
        }
        if let Some(bad) = marks.iter().find(|m| !m.is_finite()) {
            return Err(TrendError::Schema(format!(
                "non-finite mark {bad} for student '{student_id}'"
            )));
        }

        Ok(Self {
            student_id,
            student_name: student_name.into(),
            years,
            marks,
        })
    }

    /// Number of observations (always ≥ 1).
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always false; a constructed series holds at least one observation.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Academic years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Marks, paired 1:1 with [`years`](Self::years).
    pub fn marks(&self) -> &[f64] {
        &self.marks
    }
}
