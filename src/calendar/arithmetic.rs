// Date arithmetic
// Zone-offset shifts, component-wise addition and interval computation

use chrono::{DateTime, Days, Duration, Months, Offset, Utc};

use super::Calendar;
use crate::error::DateError;
use crate::models::offset::TimeOffset;
use crate::models::unit::DateUnit;

impl Calendar {
    /// Shift an instant by subtracting the zone's UTC offset at that instant,
    /// so its UTC fields read like the original local wall-clock time.
    pub fn to_global_time(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant - Duration::seconds(self.utc_offset_seconds(instant))
    }

    /// Inverse of [`to_global_time`](Self::to_global_time): add the zone's
    /// UTC offset at that instant.
    pub fn to_local_time(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant + Duration::seconds(self.utc_offset_seconds(instant))
    }

    /// Signed difference from `from` to `to`, decomposed into hours, minutes
    /// and seconds. An absent `to` yields [`TimeOffset::ZERO`].
    pub fn offset_time(&self, from: DateTime<Utc>, to: Option<DateTime<Utc>>) -> TimeOffset {
        match to {
            Some(to) => TimeOffset::from_seconds((to - from).num_seconds()),
            None => TimeOffset::ZERO,
        }
    }

    /// Add `value` units of a calendar component to an instant.
    ///
    /// `Day` and `Weekday` add wall-clock days in the calendar's zone;
    /// `WeekOfYear` adds seven-day blocks; `Month` and `Year` clamp the day
    /// of month when the target month is shorter (Jan 31 + 1 month is the
    /// last day of February). `Second`/`Minute`/`Hour` are absolute shifts.
    ///
    /// Units that carry no arithmetic meaning produce
    /// [`DateError::UnsupportedUnit`]; a result outside the representable
    /// date range produces [`DateError::OutOfRange`].
    pub fn add(
        &self,
        instant: DateTime<Utc>,
        unit: DateUnit,
        value: i64,
    ) -> Result<DateTime<Utc>, DateError> {
        let shifted = match unit {
            DateUnit::Second => Duration::try_seconds(value)
                .and_then(|span| instant.checked_add_signed(span)),
            DateUnit::Minute => value
                .checked_mul(60)
                .and_then(Duration::try_seconds)
                .and_then(|span| instant.checked_add_signed(span)),
            DateUnit::Hour => value
                .checked_mul(3600)
                .and_then(Duration::try_seconds)
                .and_then(|span| instant.checked_add_signed(span)),
            DateUnit::Day | DateUnit::Weekday => self.shift_days(instant, value),
            DateUnit::WeekOfYear => value
                .checked_mul(7)
                .and_then(|days| self.shift_days(instant, days)),
            DateUnit::Month => self.shift_months(instant, value),
            DateUnit::Year => value
                .checked_mul(12)
                .and_then(|months| self.shift_months(instant, months)),
            unsupported => return Err(DateError::UnsupportedUnit(unsupported)),
        };
        shifted.ok_or(DateError::OutOfRange)
    }

    fn utc_offset_seconds(&self, instant: DateTime<Utc>) -> i64 {
        self.localize(instant).offset().fix().local_minus_utc() as i64
    }

    /// Wall-clock day shift in the calendar's zone.
    fn shift_days(&self, instant: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
        let local = self.localize(instant);
        let shifted = if days >= 0 {
            local.checked_add_days(Days::new(days as u64))?
        } else {
            local.checked_sub_days(Days::new(days.unsigned_abs()))?
        };
        Some(shifted.with_timezone(&Utc))
    }

    /// Wall-clock month shift in the calendar's zone, clamping the day.
    fn shift_months(&self, instant: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
        let local = self.localize(instant);
        let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
        let shifted = if months >= 0 {
            local.checked_add_months(Months::new(magnitude))?
        } else {
            local.checked_sub_months(Months::new(magnitude))?
        };
        Some(shifted.with_timezone(&Utc))
    }
}
