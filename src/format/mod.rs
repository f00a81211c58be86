// Date formatting
// Preset render styles and pattern-to-pattern conversion

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;

/// Preset render styles, each backed by a strftime pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateStyle {
    /// `13:05 28/02/2024`
    TimeDate,
    /// `28/02/2024 13:05`
    DateTime,
    /// `28/02/2024`
    Short,
    /// `28 02 2024`
    ShortSpaced,
    /// `28 February 2024`
    Medium,
    /// `Wednesday 28, February 2024`
    Large,
    /// `28 February 2024 13:05`
    MediumDateTime,
    /// `13:05`
    TimeShort,
    /// `13:05:09`
    TimeLong,
    /// `Wednesday`
    DayName,
    /// `Wed`
    DayNameShort,
    /// `28`
    DayNumber,
    /// `Feb`
    MonthShort,
    /// `February`
    MonthLong,
    /// `28 Feb 13:05`
    DayMonthTime,
    /// `02/24`
    MonthYearShort,
    /// `February 2024`
    MonthYearLong,
    /// `20240228`
    ServiceShort,
    /// `2024-02-28`
    ServiceIso,
    /// `13:05:09+01:00`
    ServiceTimeZone,
    /// `2024-02-28T13:05:09+0100`
    ServiceIsoTimeZone,
    /// `2024-02-28T13:05:09`
    ServiceIsoTime,
    /// `2024-02-28T13:05`
    ServiceIsoTimeShort,
    /// `28-02-2024T13:05:09`
    ServiceReverseDateTime,
    /// `2024-02-2813:05`
    ServiceDateAndTime,
}

impl DateStyle {
    /// The strftime pattern backing this style.
    pub fn pattern(self) -> &'static str {
        match self {
            DateStyle::TimeDate => "%H:%M %d/%m/%Y",
            DateStyle::DateTime => "%d/%m/%Y %H:%M",
            DateStyle::Short => "%d/%m/%Y",
            DateStyle::ShortSpaced => "%d %m %Y",
            DateStyle::Medium => "%d %B %Y",
            DateStyle::Large => "%A %d, %B %Y",
            DateStyle::MediumDateTime => "%d %B %Y %H:%M",
            DateStyle::TimeShort => "%H:%M",
            DateStyle::TimeLong => "%H:%M:%S",
            DateStyle::DayName => "%A",
            DateStyle::DayNameShort => "%a",
            DateStyle::DayNumber => "%d",
            DateStyle::MonthShort => "%b",
            DateStyle::MonthLong => "%B",
            DateStyle::DayMonthTime => "%d %b %H:%M",
            DateStyle::MonthYearShort => "%m/%y",
            DateStyle::MonthYearLong => "%B %Y",
            DateStyle::ServiceShort => "%Y%m%d",
            DateStyle::ServiceIso => "%Y-%m-%d",
            DateStyle::ServiceTimeZone => "%H:%M:%S%:z",
            DateStyle::ServiceIsoTimeZone => "%Y-%m-%dT%H:%M:%S%z",
            DateStyle::ServiceIsoTime => "%Y-%m-%dT%H:%M:%S",
            DateStyle::ServiceIsoTimeShort => "%Y-%m-%dT%H:%M",
            DateStyle::ServiceReverseDateTime => "%d-%m-%YT%H:%M:%S",
            DateStyle::ServiceDateAndTime => "%Y-%m-%d%H:%M",
        }
    }
}

impl Calendar {
    /// Render an instant in this calendar's zone with a preset style.
    pub fn format(&self, instant: DateTime<Utc>, style: DateStyle) -> String {
        self.localize(instant).format(style.pattern()).to_string()
    }

    /// Local time of day as a short human-readable duration, `"2 h 30 min"`.
    /// Minutes are omitted when zero; midnight renders as an empty string.
    pub fn human_readable_time(&self, instant: DateTime<Utc>) -> String {
        let local = self.localize(instant);
        let (hours, minutes) = (local.hour(), local.minute());
        if minutes == 0 {
            if hours > 0 {
                format!("{hours} h")
            } else {
                String::new()
            }
        } else {
            format!("{hours} h {minutes} min")
        }
    }
}

/// Re-render a date/time string from one strftime pattern to another.
///
/// The value is first read as a full datetime, then as a date (midnight
/// assumed), then as a time of day. Returns `None` when the value does not
/// parse with `from`, or when `to` needs fields the parsed value cannot
/// supply (such as a zone offset).
pub fn convert_format(value: &str, from: &str, to: &str) -> Option<String> {
    let parsed = parse_naive(value, from);
    let Some(datetime) = parsed else {
        log::debug!("value {:?} does not match pattern {:?}", value, from);
        return None;
    };

    // Rendering can still fail when `to` has specifiers the naive value
    // cannot satisfy; write! surfaces that instead of panicking.
    let mut out = String::new();
    write!(out, "{}", datetime.format(to)).ok()?;
    Some(out)
}

fn parse_naive(value: &str, pattern: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, pattern) {
        return Some(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(time) = NaiveTime::parse_from_str(value, pattern) {
        return Some(NaiveDate::from_ymd_opt(1970, 1, 1)?.and_time(time));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn sample() -> DateTime<Utc> {
        // Wednesday, Feb 28, 2024
        Utc.with_ymd_and_hms(2024, 2, 28, 13, 5, 9).unwrap()
    }

    #[test_case(DateStyle::TimeDate, "13:05 28/02/2024"; "time date")]
    #[test_case(DateStyle::DateTime, "28/02/2024 13:05"; "date time")]
    #[test_case(DateStyle::Short, "28/02/2024"; "short")]
    #[test_case(DateStyle::Medium, "28 February 2024"; "medium")]
    #[test_case(DateStyle::Large, "Wednesday 28, February 2024"; "large")]
    #[test_case(DateStyle::TimeLong, "13:05:09"; "time long")]
    #[test_case(DateStyle::DayNameShort, "Wed"; "day name short")]
    #[test_case(DateStyle::MonthYearShort, "02/24"; "month year short")]
    #[test_case(DateStyle::ServiceShort, "20240228"; "service short")]
    #[test_case(DateStyle::ServiceIso, "2024-02-28"; "service iso")]
    #[test_case(DateStyle::ServiceIsoTime, "2024-02-28T13:05:09"; "service iso time")]
    #[test_case(DateStyle::ServiceReverseDateTime, "28-02-2024T13:05:09"; "reverse")]
    fn preset_rendering(style: DateStyle, expected: &str) {
        assert_eq!(Calendar::utc().format(sample(), style), expected);
    }

    #[test]
    fn rendering_follows_the_zone() {
        let calendar = Calendar::new(chrono_tz::Europe::Madrid);
        // 13:05 UTC is 14:05 in Madrid (winter, UTC+1)
        assert_eq!(calendar.format(sample(), DateStyle::TimeShort), "14:05");
        assert_eq!(
            calendar.format(sample(), DateStyle::ServiceTimeZone),
            "14:05:09+01:00"
        );
    }

    #[test]
    fn convert_between_datetime_patterns() {
        assert_eq!(
            convert_format("2024-02-28T13:05:09", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"),
            Some("28/02/2024 13:05".to_string())
        );
    }

    #[test]
    fn convert_date_only_assumes_midnight() {
        assert_eq!(
            convert_format("28/02/2024", "%d/%m/%Y", "%Y-%m-%dT%H:%M:%S"),
            Some("2024-02-28T00:00:00".to_string())
        );
    }

    #[test]
    fn convert_time_only_patterns() {
        assert_eq!(
            convert_format("13:05:09", "%H:%M:%S", "%H:%M"),
            Some("13:05".to_string())
        );
    }

    #[test]
    fn convert_rejects_unparseable_values() {
        assert_eq!(convert_format("not a date", "%Y-%m-%d", "%d/%m/%Y"), None);
        assert_eq!(convert_format("2024-13-40", "%Y-%m-%d", "%d/%m/%Y"), None);
    }

    #[test]
    fn convert_rejects_target_needing_a_zone_offset() {
        // A naive value cannot supply %z
        assert_eq!(convert_format("2024-02-28", "%Y-%m-%d", "%Y-%m-%d%z"), None);
    }

    #[test_case(9, 0, "9 h"; "whole hours")]
    #[test_case(2, 30, "2 h 30 min"; "hours and minutes")]
    #[test_case(0, 45, "0 h 45 min"; "minutes only")]
    #[test_case(0, 0, ""; "midnight is empty")]
    fn human_readable_time_cases(hour: u32, minute: u32, expected: &str) {
        let calendar = Calendar::utc();
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap();
        assert_eq!(calendar.human_readable_time(instant), expected);
    }
}
