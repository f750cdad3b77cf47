//! Conversions between [`TimeValue`] and other time representations.
//!
//! - [`WallClockParts`]: seconds + microseconds, the portable shape of a
//!   POSIX `struct timeval`
//! - [`std::time::Duration`] in both directions
//! - `libc::timeval` / `libc::timespec` on unix targets
//!
//! None of these apply an epoch translation. A value relative to the
//! monotonic clock's reference point stays relative to it.

use crate::error::TimeError;
use crate::time::{TimeValue, TICKS_PER_SECOND, TICKS_PER_US};
use std::time::Duration;

/// A time value split into whole seconds and a microsecond remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClockParts {
    /// Whole seconds.
    pub seconds: u64,
    /// Sub-second remainder, truncated to microseconds (`0..1_000_000`).
    pub microseconds: u32,
}

impl TimeValue {
    /// Split into whole seconds and truncated microseconds.
    ///
    /// ```
    /// use sectime_common::time::TimeValue;
    ///
    /// let parts = TimeValue::from_ticks(1_500_000).to_wall_clock_parts();
    /// assert_eq!((parts.seconds, parts.microseconds), (0, 1500));
    /// ```
    #[must_use]
    pub const fn to_wall_clock_parts(self) -> WallClockParts {
        let ticks = self.ticks();
        // Remainder is below 10^6, which always fits in u32.
        #[allow(clippy::cast_possible_truncation)]
        let microseconds = ((ticks % TICKS_PER_SECOND) / TICKS_PER_US) as u32;
        WallClockParts {
            seconds: ticks / TICKS_PER_SECOND,
            microseconds,
        }
    }

    /// Build from a `(seconds, nanoseconds)` pair as returned by
    /// `clock_gettime`.
    ///
    /// Seconds past the ceiling saturate to [`TimeValue::INFINITE`].
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] if `secs` is negative or `nanos` is outside
    /// `0..1_000_000_000`.
    pub fn try_from_timespec(secs: i64, nanos: i64) -> Result<Self, TimeError> {
        let secs = u64::try_from(secs).map_err(|_| TimeError::NegativeSeconds(secs))?;
        let nanos = u64::try_from(nanos)
            .ok()
            .filter(|n| *n < TICKS_PER_SECOND)
            .ok_or(TimeError::NanosOutOfRange(nanos))?;
        Ok(Self::from_secs(secs) + Self::from_ticks(nanos))
    }

    /// Convert to a `timeval` for OS timer APIs.
    ///
    /// Seconds that do not fit in `time_t` clamp to `time_t::MAX`.
    #[cfg(unix)]
    #[must_use]
    pub fn to_timeval(self) -> libc::timeval {
        let parts = self.to_wall_clock_parts();
        libc::timeval {
            tv_sec: clamp_time_t(parts.seconds),
            tv_usec: libc::suseconds_t::try_from(parts.microseconds)
                .unwrap_or(libc::suseconds_t::MAX),
        }
    }

    /// Convert to a `timespec` for OS timer APIs.
    ///
    /// Seconds that do not fit in `time_t` clamp to `time_t::MAX`.
    #[cfg(unix)]
    #[must_use]
    pub fn to_timespec(self) -> libc::timespec {
        let ticks = self.ticks();
        libc::timespec {
            tv_sec: clamp_time_t(ticks / TICKS_PER_SECOND),
            tv_nsec: libc::c_long::try_from(ticks % TICKS_PER_SECOND)
                .unwrap_or(libc::c_long::MAX),
        }
    }
}

#[cfg(unix)]
fn clamp_time_t(secs: u64) -> libc::time_t {
    libc::time_t::try_from(secs).unwrap_or(libc::time_t::MAX)
}

impl From<Duration> for TimeValue {
    /// Saturates to [`TimeValue::INFINITE`] for durations past the ceiling.
    fn from(duration: Duration) -> Self {
        Self::from_ticks(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }
}

impl From<TimeValue> for Duration {
    fn from(value: TimeValue) -> Self {
        Duration::from_nanos(value.ticks())
    }
}
