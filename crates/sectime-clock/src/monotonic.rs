//! OS monotonic clock.
//!
//! Readings are nanosecond ticks since an unspecified reference point that
//! stays fixed for the life of the process:
//!
//! - Unix: `clock_gettime` on the selected clock id
//! - Other targets: elapsed time since an anchor captured on first read
//!
//! Failed reads never reach the caller of [`ClockSource::now`]; they are
//! logged and replaced by [`TimeValue::ZERO`]. Use
//! [`MonotonicClock::try_now`] to observe the error instead.

use crate::source::ClockSource;
use sectime_common::config::ClockKind;
use sectime_common::error::{ClockError, ClockResult};
use sectime_common::time::TimeValue;
use tracing::{debug, warn};

/// The process-wide OS monotonic clock.
///
/// Stateless and `Copy`; any number of threads may read it concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotonicClock {
    kind: ClockKind,
}

impl MonotonicClock {
    /// `CLOCK_MONOTONIC`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kind: ClockKind::Monotonic,
        }
    }

    /// Read a specific OS clock.
    ///
    /// Kinds the target does not provide are replaced by
    /// [`ClockKind::Monotonic`].
    #[must_use]
    pub fn with_kind(kind: ClockKind) -> Self {
        let effective = supported_kind(kind);
        if effective != kind {
            debug!(
                requested = %kind,
                using = %effective,
                "Clock kind unavailable on this target"
            );
        }
        Self { kind: effective }
    }

    /// The clock actually being read.
    #[must_use]
    pub const fn kind(&self) -> ClockKind {
        self.kind
    }

    /// Read the clock, reporting OS failures.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Read`] if the OS call fails and
    /// [`ClockError::Conversion`] if it returns a negative or malformed reading.
    pub fn try_now(&self) -> ClockResult<TimeValue> {
        read(self.kind)
    }
}

impl ClockSource for MonotonicClock {
    fn now(&self) -> TimeValue {
        or_epoch(self.kind, self.try_now())
    }
}

/// Current reading of `CLOCK_MONOTONIC`, or the epoch if the read fails.
///
/// ```
/// let start = sectime_clock::now();
/// let later = sectime_clock::now();
/// assert!(later >= start);
/// ```
#[must_use]
pub fn now() -> TimeValue {
    MonotonicClock::new().now()
}

fn or_epoch(kind: ClockKind, reading: ClockResult<TimeValue>) -> TimeValue {
    match reading {
        Ok(now) => now,
        Err(e) => {
            warn!(clock = %kind, error = %e, "Clock read failed, returning epoch");
            TimeValue::ZERO
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn supported_kind(kind: ClockKind) -> ClockKind {
    kind
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn supported_kind(_kind: ClockKind) -> ClockKind {
    ClockKind::Monotonic
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn clock_id(kind: ClockKind) -> nix::time::ClockId {
    use nix::time::ClockId;

    match kind {
        ClockKind::Monotonic => ClockId::CLOCK_MONOTONIC,
        ClockKind::MonotonicRaw => ClockId::CLOCK_MONOTONIC_RAW,
        ClockKind::Boottime => ClockId::CLOCK_BOOTTIME,
    }
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
fn clock_id(_kind: ClockKind) -> nix::time::ClockId {
    nix::time::ClockId::CLOCK_MONOTONIC
}

#[cfg(unix)]
fn read(kind: ClockKind) -> ClockResult<TimeValue> {
    let ts = nix::time::clock_gettime(clock_id(kind)).map_err(|errno| ClockError::Read {
        clock: kind,
        source: errno.into(),
    })?;

    // time_t and c_long are 32 bits wide on some targets.
    #[allow(clippy::useless_conversion)]
    let (secs, nanos) = (i64::from(ts.tv_sec()), i64::from(ts.tv_nsec()));

    TimeValue::try_from_timespec(secs, nanos)
        .map_err(|source| ClockError::Conversion { clock: kind, source })
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn read(_kind: ClockKind) -> ClockResult<TimeValue> {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    let anchor = *ANCHOR.get_or_init(Instant::now);
    Ok(TimeValue::from(anchor.elapsed()))
}
