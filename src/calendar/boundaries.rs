// Calendar boundary computation
// Day/week/month/year edges of the period containing an instant

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};

use super::Calendar;

impl Calendar {
    /// First instant of the day containing `instant` (local 00:00:00).
    pub fn start_of_day(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let date = self.localize(instant).date_naive();
        self.resolve(date.and_hms_opt(0, 0, 0)?)
    }

    /// Last counted second of the day containing `instant` (local 23:59:59).
    pub fn end_of_day(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let date = self.localize(instant).date_naive();
        self.resolve(date.and_hms_opt(23, 59, 59)?)
    }

    /// First day of the month containing `instant`, at local midnight.
    pub fn start_of_month(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local = self.localize(instant);
        let first = NaiveDate::from_ymd_opt(local.year(), local.month(), 1)?;
        self.resolve(first.and_hms_opt(0, 0, 0)?)
    }

    /// Last day of the month containing `instant`, at local 23:59:59.
    pub fn end_of_month(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local = self.localize(instant);
        let first = NaiveDate::from_ymd_opt(local.year(), local.month(), 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        self.resolve(last.and_hms_opt(23, 59, 59)?)
    }

    /// January 1st of the year containing `instant`, at local midnight.
    pub fn start_of_year(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local = self.localize(instant);
        let first = NaiveDate::from_ymd_opt(local.year(), 1, 1)?;
        self.resolve(first.and_hms_opt(0, 0, 0)?)
    }

    /// December 31st of the year containing `instant`, at local 23:59:59.
    pub fn end_of_year(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local = self.localize(instant);
        let last = NaiveDate::from_ymd_opt(local.year(), 12, 31)?;
        self.resolve(last.and_hms_opt(23, 59, 59)?)
    }

    /// Monday of the ISO week containing `instant`, at local midnight.
    pub fn start_of_week(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let date = self.localize(instant).date_naive();
        let monday =
            date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))?;
        self.resolve(monday.and_hms_opt(0, 0, 0)?)
    }

    /// Sunday of the ISO week containing `instant`, at local midnight.
    pub fn end_of_week(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let date = self.localize(instant).date_naive();
        let monday =
            date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))?;
        let sunday = monday.checked_add_days(Days::new(6))?;
        self.resolve(sunday.and_hms_opt(0, 0, 0)?)
    }

    /// Number of days in the month containing `instant`.
    pub fn days_in_month(&self, instant: DateTime<Utc>) -> u32 {
        let local = self.localize(instant);
        match local.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if local.date_naive().leap_year() {
                    29
                } else {
                    28
                }
            }
        }
    }
}
