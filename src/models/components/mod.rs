// Calendar components module
// Read-only breakdown of an instant into calendar fields

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Day of the week with fixed ordinals, Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl WeekDay {
    /// Fixed ordinal of this day, Monday = 0 through Sunday = 6
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Day for a Monday-based ordinal, `None` when out of 0..=6
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(WeekDay::Monday),
            1 => Some(WeekDay::Tuesday),
            2 => Some(WeekDay::Wednesday),
            3 => Some(WeekDay::Thursday),
            4 => Some(WeekDay::Friday),
            5 => Some(WeekDay::Saturday),
            6 => Some(WeekDay::Sunday),
            _ => None,
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => WeekDay::Monday,
            Weekday::Tue => WeekDay::Tuesday,
            Weekday::Wed => WeekDay::Wednesday,
            Weekday::Thu => WeekDay::Thursday,
            Weekday::Fri => WeekDay::Friday,
            Weekday::Sat => WeekDay::Saturday,
            Weekday::Sun => WeekDay::Sunday,
        }
    }
}

impl From<WeekDay> for Weekday {
    fn from(day: WeekDay) -> Self {
        match day {
            WeekDay::Monday => Weekday::Mon,
            WeekDay::Tuesday => Weekday::Tue,
            WeekDay::Wednesday => Weekday::Wed,
            WeekDay::Thursday => Weekday::Thu,
            WeekDay::Friday => Weekday::Fri,
            WeekDay::Saturday => Weekday::Sat,
            WeekDay::Sunday => Weekday::Sun,
        }
    }
}

/// Calendar breakdown of an instant as seen in a given time zone.
///
/// `weekday` is Monday-based (see [`WeekDay`]); `day_of_year` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarComponents {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub weekday: WeekDay,
    pub hour: u32,
    pub minute: u32,
    pub day_of_year: u32,
}
