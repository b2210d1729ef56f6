use super::history::{EmployeeHistory, ShiftRecord};
use super::parser::{parse_timestamp, TimecardRow};
use super::report::{AnalysisResult, Flag};
use super::rules::{self, ShiftRule, ShiftThresholds};
use super::TimecardError;
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// Single-pass fold over timecard rows.
///
/// Each row is compared only with the previous row seen for the same
/// employee name, then appended to that employee's history whether or not a
/// rule fired. Rows must be fed in input order.
#[derive(Debug)]
pub struct ShiftAnalyzer {
    thresholds: ShiftThresholds,
    history: EmployeeHistory,
    result: AnalysisResult,
    rows_processed: u64,
}

impl ShiftAnalyzer {
    pub fn new(thresholds: ShiftThresholds) -> Self {
        Self {
            thresholds,
            history: EmployeeHistory::new(),
            result: AnalysisResult::default(),
            rows_processed: 0,
        }
    }

    pub fn thresholds(&self) -> &ShiftThresholds {
        &self.thresholds
    }

    pub fn history(&self) -> &EmployeeHistory {
        &self.history
    }

    /// Applies every rule to one row. A timestamp that cannot be parsed is
    /// returned as an error and the row is left out of the history, but it
    /// still counts toward record numbering.
    pub fn process(&mut self, row: &TimecardRow) -> Result<(), TimecardError> {
        self.rows_processed += 1;
        let record = self.rows_processed;
        let time_in = parse_field(record, "Time", &row.time_in)?;
        let time_out = parse_field(record, "Time Out", &row.time_out)?;

        let mut fired = Vec::with_capacity(3);
        if let Some(last) = self.history.last_shift(&row.employee_name) {
            if rules::within_consecutive_days(last.time_out, time_in, &self.thresholds) {
                fired.push(ShiftRule::ConsecutiveDays);
            }
            if rules::within_gap_window(last.time_out, time_in, &self.thresholds) {
                fired.push(ShiftRule::TimeBetweenShifts);
            }
        }
        if rules::exceeds_shift_duration(time_in, time_out, &self.thresholds) {
            fired.push(ShiftRule::SingleShiftDuration);
        }

        for rule in fired {
            debug!(
                record,
                employee = %row.employee_name,
                position = %row.position_id,
                rule = rule.label(),
                "shift rule fired"
            );
            self.result.push(
                rule,
                Flag {
                    employee_name: row.employee_name.clone(),
                    position: row.position_id.clone(),
                },
            );
        }

        self.history
            .record(&row.employee_name, ShiftRecord { time_in, time_out });
        Ok(())
    }

    pub fn finish(self) -> AnalysisResult {
        info!(
            rows = self.rows_processed,
            employees = self.history.employee_count(),
            consecutive_days = self.result.consecutive_days.len(),
            time_between_shifts = self.result.time_between_shifts.len(),
            single_shift_duration = self.result.single_shift_duration.len(),
            "timecard analysis complete"
        );
        self.result
    }
}

fn parse_field(
    record: u64,
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, TimecardError> {
    parse_timestamp(value).ok_or_else(|| TimecardError::Timestamp {
        record,
        field,
        value: value.to_string(),
    })
}
