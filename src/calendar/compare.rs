// Instant comparison
// Full-instant, date-only and time-of-day orderings

use std::cmp::Ordering;

use chrono::{DateTime, Timelike, Utc};

use super::Calendar;

impl Calendar {
    /// Order two instants by local time of day, ignoring date and seconds.
    pub fn compare_time(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> Ordering {
        let a = self.localize(a);
        let b = self.localize(b);
        (a.hour(), a.minute()).cmp(&(b.hour(), b.minute()))
    }

    /// Whether `instant`'s local time of day lies in `[start, end]`,
    /// inclusive on both ends. Dates and seconds are ignored.
    pub fn is_between_time(
        &self,
        instant: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        self.compare_time(instant, start) != Ordering::Less
            && self.compare_time(instant, end) != Ordering::Greater
    }

    /// Whether `instant` lies in `[start, end]` by full instant ordering,
    /// inclusive on both ends.
    pub fn is_between(
        &self,
        instant: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        start <= instant && instant <= end
    }

    /// Whether two instants fall on the same local calendar day.
    pub fn is_same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.localize(a).date_naive() == self.localize(b).date_naive()
    }
}
