//! Marks records and the ingested dataset.

use crate::error::{Result, TrendError};

use super::series::MarksSeries;

/// Inclusive range of academic years accepted by ingestion.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1800..=3000;

/// One row of the ingested table: a student's score for one academic year.
#[derive(Debug, Clone, PartialEq)]
pub struct MarksRecord {
    pub student_id: String,
    pub student_name: String,
    pub academic_year: i32,
    pub marks: f64,
}

/// The full ingested record set, across all students.
///
/// The dataset keeps rows in upload order; chronological sorting happens when
/// a per-student series is sliced out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarksDataset {
    records: Vec<MarksRecord>,
}

impl MarksDataset {
    pub fn new(records: Vec<MarksRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MarksRecord] {
        &self.records
    }

    /// Unique `(student_id, student_name)` pairs in first-appearance order.
    ///
    /// The order matches the upload, so a caller presenting a selection list
    /// shows students the way the file listed them.
    pub fn students(&self) -> Vec<(&str, &str)> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.student_id.as_str()))
            .map(|r| (r.student_id.as_str(), r.student_name.as_str()))
            .collect()
    }

    /// Slice out one student's marks as a chronologically ordered series.
    ///
    /// Rows are sorted ascending by academic year. A student with two rows
    /// for the same year violates the one-row-per-year contract and is
    /// reported as a schema failure, not collapsed.
    pub fn series_for(&self, student_id: &str) -> Result<MarksSeries> {
        let mut rows: Vec<&MarksRecord> = self
            .records
            .iter()
            .filter(|r| r.student_id == student_id)
            .collect();

        if rows.is_empty() {
            return Err(TrendError::EmptyInput(format!(
                "no rows for student '{student_id}'"
            )));
        }

        rows.sort_by_key(|r| r.academic_year);

        for w in rows.windows(2) {
            if w[0].academic_year == w[1].academic_year {
                return Err(TrendError::Schema(format!(
                    "duplicate academic year {} for student '{student_id}'",
                    w[0].academic_year
                )));
            }
        }

        let years: Vec<i32> = rows.iter().map(|r| r.academic_year).collect();
        let marks: Vec<f64> = rows.iter().map(|r| r.marks).collect();
        let name = rows[0].student_name.clone();

        MarksSeries::new(student_id, name, years, marks)
    }
}
