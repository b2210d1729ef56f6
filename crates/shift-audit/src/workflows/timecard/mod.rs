//! Timecard scheduling audit.
//!
//! Rows are consumed one at a time in file order. For every row the analyzer
//! compares the clock-in against the previous clock-out recorded for the same
//! employee and checks the shift's own length, producing three flag lists:
//!
//! - consecutive days: previous clock-out and this clock-in at most
//!   `consecutive_days` apart (absolute difference)
//! - time between shifts: signed gap strictly inside
//!   (`min_gap_hours`, `max_gap_hours`)
//! - single shift duration: shift strictly longer than `max_shift_hours`

mod analyzer;
mod history;
mod parser;
mod report;
mod rules;

pub use analyzer::ShiftAnalyzer;
pub use history::{EmployeeHistory, ShiftRecord};
pub use parser::{rows, TimecardRow};
pub use report::{AnalysisResult, Flag};
pub use rules::{ShiftRule, ShiftThresholds};

use std::convert::Infallible;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimecardError {
    #[error("failed to read timecard export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid timecard CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {record}: could not parse {field} value '{value}' as a date-time")]
    Timestamp {
        record: u64,
        field: &'static str,
        value: String,
    },
}

impl From<Infallible> for TimecardError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Drains `rows` through a fresh [`ShiftAnalyzer`]. The first error ends the
/// run and no partial result is returned.
pub fn analyze_rows<I, E>(
    rows: I,
    thresholds: ShiftThresholds,
) -> Result<AnalysisResult, TimecardError>
where
    I: IntoIterator<Item = Result<TimecardRow, E>>,
    TimecardError: From<E>,
{
    let mut analyzer = ShiftAnalyzer::new(thresholds);
    for row in rows {
        analyzer.process(&row?)?;
    }
    Ok(analyzer.finish())
}

pub struct TimecardImporter;

impl TimecardImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        thresholds: ShiftThresholds,
    ) -> Result<AnalysisResult, TimecardError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, thresholds)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        thresholds: ShiftThresholds,
    ) -> Result<AnalysisResult, TimecardError> {
        analyze_rows(parser::rows(reader), thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Employee Name,Position ID,Time,Time Out\n";

    #[test]
    fn analyze_rows_accepts_infallible_sources() {
        let rows = vec![
            Ok::<_, Infallible>(TimecardRow::new(
                "Jane Doe",
                "WFS000001",
                "2024-01-01T08:00",
                "2024-01-01T16:00",
            )),
            Ok(TimecardRow::new(
                "Jane Doe",
                "WFS000001",
                "2024-01-01T17:30",
                "2024-01-01T20:00",
            )),
        ];

        let result = analyze_rows(rows, ShiftThresholds::default()).expect("analysis succeeds");
        assert_eq!(result.consecutive_days.len(), 1);
        assert_eq!(result.time_between_shifts.len(), 1);
        assert!(result.single_shift_duration.is_empty());
    }

    #[test]
    fn importer_surfaces_malformed_csv() {
        let csv = format!("{HEADER}Jane Doe,WFS000001,2024-01-01T08:00\n");
        let error = TimecardImporter::from_reader(Cursor::new(csv), ShiftThresholds::default())
            .expect_err("short row rejected");

        match error {
            TimecardError::Csv(_) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = TimecardImporter::from_path("./does-not-exist.csv", ShiftThresholds::default())
            .expect_err("expected io error");

        match error {
            TimecardError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_input_yields_empty_result() {
        let result = TimecardImporter::from_reader(Cursor::new(HEADER), ShiftThresholds::default())
            .expect("analysis succeeds");
        assert!(result.is_empty());
    }
}
