use super::rules::ShiftRule;
use serde::Serialize;

/// A rule violation attributed to the row that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flag {
    pub employee_name: String,
    pub position: String,
}

/// Flags per rule, each list in input row order. Duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub consecutive_days: Vec<Flag>,
    pub time_between_shifts: Vec<Flag>,
    pub single_shift_duration: Vec<Flag>,
}

impl AnalysisResult {
    pub fn flags(&self, rule: ShiftRule) -> &[Flag] {
        match rule {
            ShiftRule::ConsecutiveDays => &self.consecutive_days,
            ShiftRule::TimeBetweenShifts => &self.time_between_shifts,
            ShiftRule::SingleShiftDuration => &self.single_shift_duration,
        }
    }

    pub fn total_flags(&self) -> usize {
        ShiftRule::ordered()
            .into_iter()
            .map(|rule| self.flags(rule).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_flags() == 0
    }

    pub(crate) fn push(&mut self, rule: ShiftRule, flag: Flag) {
        match rule {
            ShiftRule::ConsecutiveDays => self.consecutive_days.push(flag),
            ShiftRule::TimeBetweenShifts => self.time_between_shifts.push(flag),
            ShiftRule::SingleShiftDuration => self.single_shift_duration.push(flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flag(name: &str, position: &str) -> Flag {
        Flag {
            employee_name: name.to_string(),
            position: position.to_string(),
        }
    }

    #[test]
    fn push_routes_flags_to_their_rule() {
        let mut result = AnalysisResult::default();
        assert!(result.is_empty());

        result.push(ShiftRule::SingleShiftDuration, flag("Jane Doe", "WFS000001"));
        result.push(ShiftRule::ConsecutiveDays, flag("Jane Doe", "WFS000001"));
        result.push(ShiftRule::ConsecutiveDays, flag("Jane Doe", "WFS000001"));

        assert_eq!(result.flags(ShiftRule::ConsecutiveDays).len(), 2);
        assert!(result.flags(ShiftRule::TimeBetweenShifts).is_empty());
        assert_eq!(result.flags(ShiftRule::SingleShiftDuration).len(), 1);
        assert_eq!(result.total_flags(), 3);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut result = AnalysisResult::default();
        result.push(ShiftRule::TimeBetweenShifts, flag("John Roe", "WFS000002"));

        assert_eq!(
            serde_json::to_value(&result).expect("serializes"),
            json!({
                "consecutiveDays": [],
                "timeBetweenShifts": [{ "employeeName": "John Roe", "position": "WFS000002" }],
                "singleShiftDuration": [],
            })
        );
    }
}
