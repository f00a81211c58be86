// Calendar context
// Pure date/time transformations against an explicit time zone

mod arithmetic;
mod boundaries;
mod compare;
mod components;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Calendar configuration against which instants are interpreted.
///
/// Holds the time zone explicitly instead of reading ambient process-global
/// settings, so every operation is a pure function of its inputs. The
/// calendar system is chrono's proleptic Gregorian calendar with ISO
/// (Monday-first) weeks.
///
/// All operations take and return UTC instants; the zone only affects how
/// an instant is broken into wall-clock fields.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use datekit::Calendar;
///
/// let calendar = Calendar::new(chrono_tz::Europe::Madrid);
/// let instant = Utc.with_ymd_and_hms(2024, 6, 15, 22, 30, 0).unwrap();
/// // 22:30 UTC is 00:30 the next day in Madrid (CEST, UTC+2)
/// assert_eq!(calendar.components(instant).day, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// View an instant as wall-clock time in this calendar's zone.
    pub(crate) fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    /// Map a wall-clock time in this calendar's zone back to an instant.
    ///
    /// Returns `None` when the wall-clock time does not map to exactly one
    /// instant (skipped or repeated during a zone transition).
    pub(crate) fn resolve(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self.tz.from_local_datetime(&local).single() {
            Some(resolved) => Some(resolved.with_timezone(&Utc)),
            None => {
                log::debug!("wall-clock time {} is not unique in {}", local, self.tz);
                None
            }
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}
