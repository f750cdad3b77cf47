//! The clock capability consumed by timeout and deadline code.
//!
//! Production code reads [`MonotonicClock`]; tests substitute a
//! [`ManualClock`]. [`from_config`] picks one from a [`ClockConfig`].

use crate::manual::ManualClock;
use crate::monotonic::MonotonicClock;
use sectime_common::config::{ClockConfig, SourceKind};
use sectime_common::time::TimeValue;
use std::sync::Arc;
use tracing::debug;

/// A source of monotonic time values.
///
/// Implementations must be cheap to call and safe to share across threads.
/// Reads never fail; a source that cannot produce a reading returns
/// [`TimeValue::ZERO`].
pub trait ClockSource: Send + Sync {
    /// Current reading.
    fn now(&self) -> TimeValue;

    /// Time elapsed since an earlier reading from the same source.
    ///
    /// Zero if `earlier` is ahead of the current reading, including when the
    /// current read fell back to the epoch.
    fn elapsed_since(&self, earlier: TimeValue) -> TimeValue {
        self.now() - earlier
    }
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn now(&self) -> TimeValue {
        (**self).now()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for Box<T> {
    fn now(&self) -> TimeValue {
        (**self).now()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for Arc<T> {
    fn now(&self) -> TimeValue {
        (**self).now()
    }
}

/// Either clock, as selected by configuration.
#[derive(Debug, Clone)]
pub enum AnyClock {
    /// OS monotonic clock.
    Monotonic(MonotonicClock),
    /// Manually driven clock.
    Manual(ManualClock),
}

impl Default for AnyClock {
    fn default() -> Self {
        AnyClock::Monotonic(MonotonicClock::new())
    }
}

impl ClockSource for AnyClock {
    fn now(&self) -> TimeValue {
        match self {
            AnyClock::Monotonic(clock) => clock.now(),
            AnyClock::Manual(clock) => clock.now(),
        }
    }
}

impl From<MonotonicClock> for AnyClock {
    fn from(clock: MonotonicClock) -> Self {
        AnyClock::Monotonic(clock)
    }
}

impl From<ManualClock> for AnyClock {
    fn from(clock: ManualClock) -> Self {
        AnyClock::Manual(clock)
    }
}

/// Build the clock described by `config`.
#[must_use]
pub fn from_config(config: &ClockConfig) -> AnyClock {
    match config.source.os_clock() {
        Some(kind) => {
            let clock = MonotonicClock::with_kind(kind);
            debug!(clock = %clock.kind(), "Using OS monotonic clock");
            clock.into()
        }
        None => {
            debug_assert_eq!(config.source, SourceKind::Manual);
            debug!(
                start_ticks = config.manual.start.ticks(),
                step_ticks = config.manual.step.ticks(),
                "Using manual clock"
            );
            ManualClock::from_config(&config.manual).into()
        }
    }
}
