use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;

/// One decoded timecard row. Columns other than these four are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimecardRow {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Position ID")]
    pub position_id: String,
    #[serde(rename = "Time")]
    pub time_in: String,
    #[serde(rename = "Time Out")]
    pub time_out: String,
}

impl TimecardRow {
    pub fn new(
        employee_name: impl Into<String>,
        position_id: impl Into<String>,
        time_in: impl Into<String>,
        time_out: impl Into<String>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            position_id: position_id.into(),
            time_in: time_in.into(),
            time_out: time_out.into(),
        }
    }
}

/// Lazily decodes rows; nothing past the header is read until iterated.
///
/// Only header names are trimmed. Field values are kept verbatim so names that
/// differ in whitespace stay distinct employees. Columns bind by header name,
/// so rows with a trailing comma are accepted.
pub fn rows<R: Read>(reader: R) -> impl Iterator<Item = Result<TimecardRow, csv::Error>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader)
        .into_deserialize::<TimecardRow>()
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses the timestamp shapes found in timecard exports. Offsets are
/// normalized to UTC; naive values are taken as wall-clock time.
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(dt);
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
