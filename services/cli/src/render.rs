use shift_audit::workflows::timecard::{AnalysisResult, ShiftRule, ShiftThresholds};
use std::fmt::Write;

pub(crate) fn render_text(result: &AnalysisResult, thresholds: &ShiftThresholds) -> String {
    let mut out = String::new();
    for rule in ShiftRule::ordered() {
        writeln!(out, "\n{}", rule.heading(thresholds)).expect("write heading");
        let flags = result.flags(rule);
        if flags.is_empty() {
            out.push_str("none\n");
            continue;
        }
        for flag in flags {
            writeln!(out, "- {} ({})", flag.employee_name, flag.position).expect("write flag");
        }
    }
    out
}

pub(crate) fn render_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(result)?;
    rendered.push('\n');
    Ok(rendered)
}

pub(crate) fn render_thresholds(thresholds: &ShiftThresholds) -> String {
    format!(
        "consecutive days: <= {} days apart\n\
         time between shifts: > {}h and < {}h\n\
         single shift duration: > {}h\n",
        thresholds.consecutive_days,
        thresholds.min_gap_hours,
        thresholds.max_gap_hours,
        thresholds.max_shift_hours
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shift_audit::workflows::timecard::TimecardImporter;

    fn sample_result() -> AnalysisResult {
        let csv = "Employee Name,Position ID,Time,Time Out\n\
Jane Doe,WFS000001,2024-01-01T08:00,2024-01-01T16:00\n\
Jane Doe,WFS000001,2024-01-01T17:30,2024-01-01T20:00\n";
        TimecardImporter::from_reader(csv.as_bytes(), ShiftThresholds::default())
            .expect("analysis succeeds")
    }

    #[test]
    fn text_report_lists_each_rule_in_order() {
        let rendered = render_text(&sample_result(), &ShiftThresholds::default());
        assert_eq!(
            rendered,
            "\nEmployees who have worked for 7 consecutive days:\n\
- Jane Doe (WFS000001)\n\
\nEmployees with less than 10 hours between shifts but greater than 1 hour:\n\
- Jane Doe (WFS000001)\n\
\nEmployees who have worked for more than 14 hours in a single shift:\n\
none\n"
        );
    }

    #[test]
    fn json_report_uses_camel_case_lists() {
        let rendered = render_json(&sample_result()).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["consecutiveDays"][0]["employeeName"], "Jane Doe");
        assert_eq!(value["timeBetweenShifts"][0]["position"], "WFS000001");
        assert_eq!(value["singleShiftDuration"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn thresholds_render_with_bounds() {
        let rendered = render_thresholds(&ShiftThresholds::default());
        assert!(rendered.contains("<= 7 days apart"));
        assert!(rendered.contains("> 1h and < 10h"));
        assert!(rendered.contains("> 14h"));
    }
}
