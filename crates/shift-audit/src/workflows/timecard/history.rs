use chrono::NaiveDateTime;
use std::collections::HashMap;

/// One clock-in/clock-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRecord {
    pub time_in: NaiveDateTime,
    pub time_out: NaiveDateTime,
}

/// Shifts per employee in arrival order. Only ever grows during a run.
#[derive(Debug, Default)]
pub struct EmployeeHistory {
    shifts: HashMap<String, Vec<ShiftRecord>>,
}

impl EmployeeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently recorded shift for `employee`, by arrival not by time.
    pub fn last_shift(&self, employee: &str) -> Option<&ShiftRecord> {
        self.shifts.get(employee).and_then(|shifts| shifts.last())
    }

    pub fn record(&mut self, employee: &str, shift: ShiftRecord) {
        match self.shifts.get_mut(employee) {
            Some(shifts) => shifts.push(shift),
            None => {
                self.shifts.insert(employee.to_string(), vec![shift]);
            }
        }
    }

    pub fn shifts_for(&self, employee: &str) -> &[ShiftRecord] {
        self.shifts
            .get(employee)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn employee_count(&self) -> usize {
        self.shifts.len()
    }

    pub fn shift_count(&self) -> usize {
        self.shifts.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn shift(day: u32, start: u32, end: u32) -> ShiftRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
        ShiftRecord {
            time_in: date.and_hms_opt(start, 0, 0).expect("valid start"),
            time_out: date.and_hms_opt(end, 0, 0).expect("valid end"),
        }
    }

    #[test]
    fn last_shift_follows_arrival_order_not_chronology() {
        let mut history = EmployeeHistory::new();
        history.record("Jane Doe", shift(5, 8, 16));
        history.record("Jane Doe", shift(2, 8, 16));

        assert_eq!(history.last_shift("Jane Doe"), Some(&shift(2, 8, 16)));
        assert_eq!(history.shifts_for("Jane Doe").len(), 2);
    }

    #[test]
    fn employees_are_tracked_independently() {
        let mut history = EmployeeHistory::new();
        history.record("Jane Doe", shift(1, 8, 16));
        history.record("John Roe", shift(1, 9, 17));
        history.record("Jane Doe", shift(2, 8, 16));

        assert_eq!(history.employee_count(), 2);
        assert_eq!(history.shift_count(), 3);
        assert_eq!(history.last_shift("John Roe"), Some(&shift(1, 9, 17)));
        assert!(history.last_shift("Nobody").is_none());
        assert!(history.shifts_for("Nobody").is_empty());
    }
}
