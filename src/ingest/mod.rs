//! CSV ingestion.
//!
//! Converts an uploaded delimited-text table into a validated
//! [`MarksDataset`]. The upload contract requires four columns:
//! `Academic_Year`, `Marks`, `Student_ID`, `Student_Name`; extra columns are
//! ignored. Every malformed cell fails hard with a typed error rather than
//! being coerced to a default.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::core::{MarksDataset, MarksRecord, YEAR_RANGE};
use crate::error::{Result, TrendError};

/// Header columns the upload contract requires.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Academic_Year", "Marks", "Student_ID", "Student_Name"];

/// One raw CSV row before typing and validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Academic_Year")]
    academic_year: String,
    #[serde(rename = "Marks")]
    marks: String,
    #[serde(rename = "Student_ID")]
    student_id: String,
    #[serde(rename = "Student_Name")]
    student_name: String,
}

/// Read a marks dataset from any CSV byte stream.
pub fn read_dataset<R: Read>(reader: R) -> Result<MarksDataset> {
    read_from(csv::Reader::from_reader(reader))
}

/// Read a marks dataset from a CSV file on disk.
pub fn read_dataset_from_path(path: impl AsRef<Path>) -> Result<MarksDataset> {
    read_from(csv::Reader::from_path(path.as_ref())?)
}

fn read_from<R: Read>(mut reader: csv::Reader<R>) -> Result<MarksDataset> {
    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(TrendError::Schema(format!(
                "missing required column '{required}'"
            )));
        }
    }

    let mut records = Vec::new();
    for (row_no, row) in reader.deserialize::<RawRow>().enumerate() {
        let raw = row?;
        records.push(typed_record(raw, row_no)?);
    }

    if records.is_empty() {
        return Err(TrendError::EmptyInput(
            "upload contains no data rows".to_string(),
        ));
    }

    let dataset = MarksDataset::new(records);
    log::info!(
        "ingested {} marks rows for {} students",
        dataset.len(),
        dataset.students().len()
    );
    Ok(dataset)
}

/// Validate and type one raw row.
fn typed_record(raw: RawRow, row_no: usize) -> Result<MarksRecord> {
    let student_id = raw.student_id.trim();
    if student_id.is_empty() {
        return Err(TrendError::Schema(format!(
            "row {row_no}: Student_ID is empty"
        )));
    }

    Ok(MarksRecord {
        student_id: student_id.to_string(),
        student_name: raw.student_name.trim().to_string(),
        academic_year: parse_academic_year(&raw.academic_year, row_no)?,
        marks: parse_marks(&raw.marks, row_no)?,
    })
}

/// Parse an academic year label by its first four characters.
///
/// The upload contract writes years as "2023" or "2023-24"; only the first
/// four characters are read, so "2023-24" maps to 2023. A label without a
/// four-digit integer prefix, or a year outside the accepted range, is
/// malformed and fails hard.
fn parse_academic_year(label: &str, row_no: usize) -> Result<i32> {
    let label = label.trim();
    let prefix: String = label.chars().take(4).collect();

    if prefix.chars().count() < 4 {
        return Err(TrendError::Schema(format!(
            "row {row_no}: Academic_Year '{label}' is shorter than four characters"
        )));
    }

    let year: i32 = prefix.parse().map_err(|_| {
        TrendError::Schema(format!(
            "row {row_no}: Academic_Year '{label}' has no four-digit year prefix"
        ))
    })?;

    if !YEAR_RANGE.contains(&year) {
        return Err(TrendError::Schema(format!(
            "row {row_no}: academic year {year} outside {}..={}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        )));
    }

    Ok(year)
}

/// Coerce a marks cell to a finite number.
fn parse_marks(value: &str, row_no: usize) -> Result<f64> {
    let marks: f64 = value.trim().parse().map_err(|_| {
        TrendError::Schema(format!("row {row_no}: Marks '{value}' is not numeric"))
    })?;

    // "NaN" and "inf" parse successfully but are not usable scores.
    if !marks.is_finite() {
        return Err(TrendError::Schema(format!(
            "row {row_no}: Marks '{value}' is not a finite number"
        )));
    }

    Ok(marks)
}
