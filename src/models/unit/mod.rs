// Date unit module
// Calendar components accepted by date arithmetic

use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar component kinds for [`Calendar::add`](crate::Calendar::add).
///
/// `Second` through `Year` are supported for arithmetic. The remaining
/// kinds exist so callers passing them get an explicit
/// [`DateError::UnsupportedUnit`](crate::DateError::UnsupportedUnit)
/// instead of a silently unchanged instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateUnit {
    Second,
    Minute,
    Hour,
    Day,
    Weekday,
    WeekOfYear,
    Month,
    Year,
    // Not supported for arithmetic
    Era,
    Quarter,
    WeekOfMonth,
    Nanosecond,
}

impl DateUnit {
    /// Whether this unit can be used with date arithmetic.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            DateUnit::Era | DateUnit::Quarter | DateUnit::WeekOfMonth | DateUnit::Nanosecond
        )
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateUnit::Second => "second",
            DateUnit::Minute => "minute",
            DateUnit::Hour => "hour",
            DateUnit::Day => "day",
            DateUnit::Weekday => "weekday",
            DateUnit::WeekOfYear => "week of year",
            DateUnit::Month => "month",
            DateUnit::Year => "year",
            DateUnit::Era => "era",
            DateUnit::Quarter => "quarter",
            DateUnit::WeekOfMonth => "week of month",
            DateUnit::Nanosecond => "nanosecond",
        };
        f.write_str(name)
    }
}
