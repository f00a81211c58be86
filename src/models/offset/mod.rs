// Time offset module
// Signed hour/minute/second span between two instants

use serde::{Deserialize, Serialize};

/// Signed span between two instants, decomposed into hours, minutes and
/// seconds. Not calendar-normalized: hours absorb whole days, so a 26-hour
/// difference stays `{ hours: 26, .. }`. All three fields carry the sign of
/// the underlying difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeOffset {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeOffset {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a total number of seconds into an offset.
    pub fn from_seconds(total: i64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// Total seconds represented by this offset.
    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
