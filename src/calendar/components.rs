// Component extraction

use chrono::{DateTime, Datelike, Timelike, Utc};

use super::Calendar;
use crate::models::components::CalendarComponents;

impl Calendar {
    /// Break an instant into its local calendar fields.
    pub fn components(&self, instant: DateTime<Utc>) -> CalendarComponents {
        let local = self.localize(instant);
        CalendarComponents {
            day: local.day(),
            month: local.month(),
            year: local.year(),
            weekday: local.weekday().into(),
            hour: local.hour(),
            minute: local.minute(),
            day_of_year: local.ordinal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::components::WeekDay;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn components_of_a_known_instant() {
        let calendar = Calendar::utc();
        // Thursday, Feb 29, 2024 (leap day, day-of-year 60)
        let instant = Utc.with_ymd_and_hms(2024, 2, 29, 14, 45, 30).unwrap();
        let components = calendar.components(instant);
        assert_eq!(
            components,
            CalendarComponents {
                day: 29,
                month: 2,
                year: 2024,
                weekday: WeekDay::Thursday,
                hour: 14,
                minute: 45,
                day_of_year: 60,
            }
        );
    }

    #[test]
    fn components_follow_the_zone() {
        let calendar = Calendar::new(chrono_tz::Europe::Madrid);
        // 23:30 UTC on Dec 31 is already Jan 1 in Madrid
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
        let components = calendar.components(instant);
        assert_eq!(components.year, 2024);
        assert_eq!(components.month, 1);
        assert_eq!(components.day, 1);
        assert_eq!(components.weekday, WeekDay::Monday);
        assert_eq!(components.day_of_year, 1);
        assert_eq!(components.hour, 0);
        assert_eq!(components.minute, 30);
    }
}
