//! CSV export of a transformed series.
//!
//! Serializes one student's original and derived columns as UTF-8
//! delimited text, header row included.

use std::io::Write;

use crate::core::MarksSeries;
use crate::error::{Result, TrendError};
use crate::transform::TransformResult;

/// Header row of the export format.
pub const EXPORT_HEADER: [&str; 8] = [
    "Academic_Year",
    "Student_ID",
    "Student_Name",
    "Marks",
    "Detrended",
    "Smoothed",
    "Change",
    "Peak",
];

/// Write a student's original and derived columns as CSV.
///
/// Numeric cells use the shortest decimal representation that round-trips,
/// so re-parsing the `Marks` column recovers the ingested values exactly.
/// The undefined first `Change` entry (and any other NaN) is written as an
/// empty field; an empty cell and a `0` mean different things here.
pub fn write_csv<W: Write>(
    writer: W,
    series: &MarksSeries,
    result: &TransformResult,
) -> Result<()> {
    if series.len() != result.len() {
        return Err(TrendError::DimensionMismatch {
            expected: series.len(),
            got: result.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADER)?;

    for i in 0..series.len() {
        csv_writer.write_record(&[
            series.years()[i].to_string(),
            series.student_id().to_string(),
            series.student_name().to_string(),
            format_cell(series.marks()[i]),
            format_cell(result.detrended[i]),
            format_cell(result.smoothed[i]),
            format_cell(result.change[i]),
            result.is_peak[i].to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrendError::Csv(e.to_string()))
}

/// Render the export as an in-memory UTF-8 string.
pub fn to_csv_string(series: &MarksSeries, result: &TransformResult) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, series, result)?;
    String::from_utf8(buf).map_err(|e| TrendError::Csv(e.to_string()))
}

/// Format one numeric cell; NaN is the empty field.
fn format_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}
