use chrono::NaiveDateTime;

const MILLIS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Limits applied to every processed row.
///
/// Defaults match the thresholds the audit has always used: shifts at most 7
/// days apart, a gap strictly between 1 and 10 hours, and a single shift longer
/// than 14 hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftThresholds {
    /// Inclusive upper bound, in days, on the absolute distance between the
    /// previous clock-out and the next clock-in.
    pub consecutive_days: f64,
    /// Exclusive lower bound, in hours, of the suspicious gap window.
    pub min_gap_hours: f64,
    /// Exclusive upper bound, in hours, of the suspicious gap window.
    pub max_gap_hours: f64,
    /// Exclusive upper bound, in hours, of a single shift.
    pub max_shift_hours: f64,
}

impl Default for ShiftThresholds {
    fn default() -> Self {
        Self {
            consecutive_days: 7.0,
            min_gap_hours: 1.0,
            max_gap_hours: 10.0,
            max_shift_hours: 14.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftRule {
    ConsecutiveDays,
    TimeBetweenShifts,
    SingleShiftDuration,
}

impl ShiftRule {
    pub fn ordered() -> [ShiftRule; 3] {
        [
            ShiftRule::ConsecutiveDays,
            ShiftRule::TimeBetweenShifts,
            ShiftRule::SingleShiftDuration,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftRule::ConsecutiveDays => "consecutive days",
            ShiftRule::TimeBetweenShifts => "time between shifts",
            ShiftRule::SingleShiftDuration => "single shift duration",
        }
    }

    /// Report heading with the effective threshold values filled in.
    pub fn heading(&self, thresholds: &ShiftThresholds) -> String {
        match self {
            ShiftRule::ConsecutiveDays => format!(
                "Employees who have worked for {} consecutive days:",
                thresholds.consecutive_days
            ),
            ShiftRule::TimeBetweenShifts => format!(
                "Employees with less than {} hours between shifts but greater than {} hour{}:",
                thresholds.max_gap_hours,
                thresholds.min_gap_hours,
                if thresholds.min_gap_hours == 1.0 { "" } else { "s" }
            ),
            ShiftRule::SingleShiftDuration => format!(
                "Employees who have worked for more than {} hours in a single shift:",
                thresholds.max_shift_hours
            ),
        }
    }
}

/// Absolute distance between the previous clock-out and this clock-in, so
/// overlapping or out-of-order rows still count.
pub(crate) fn within_consecutive_days(
    previous_out: NaiveDateTime,
    time_in: NaiveDateTime,
    thresholds: &ShiftThresholds,
) -> bool {
    let diff_in_days = (hours_between(previous_out, time_in) / HOURS_PER_DAY).abs();
    diff_in_days <= thresholds.consecutive_days
}

/// Signed gap: a clock-in before the previous clock-out never fires.
pub(crate) fn within_gap_window(
    previous_out: NaiveDateTime,
    time_in: NaiveDateTime,
    thresholds: &ShiftThresholds,
) -> bool {
    let gap_hours = hours_between(previous_out, time_in);
    gap_hours > thresholds.min_gap_hours && gap_hours < thresholds.max_gap_hours
}

pub(crate) fn exceeds_shift_duration(
    time_in: NaiveDateTime,
    time_out: NaiveDateTime,
    thresholds: &ShiftThresholds,
) -> bool {
    hours_between(time_in, time_out) > thresholds.max_shift_hours
}

fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_HOUR
}
