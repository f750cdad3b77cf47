//! Manually driven clock for deterministic tests.
//!
//! The clock only moves when told to: explicitly through [`ManualClock::set`]
//! and [`ManualClock::advance`], or by a fixed step after every read. Clones
//! share the same counter, so a test can hand one clone to the code under test
//! and drive time from another.

use crate::source::ClockSource;
use sectime_common::config::ManualClockConfig;
use sectime_common::time::TimeValue;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Controllable [`ClockSource`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    state: Arc<ManualState>,
}

/// Shared between clones.
#[derive(Debug, Default)]
struct ManualState {
    /// Current reading in ticks.
    ticks: AtomicU64,
    /// Ticks added after each `now()`.
    step: AtomicU64,
}

impl ManualClock {
    /// A frozen clock reading `start`.
    #[must_use]
    pub fn new(start: TimeValue) -> Self {
        Self::with_step(start, TimeValue::ZERO)
    }

    /// A clock reading `start` that moves forward by `step` after every read.
    #[must_use]
    pub fn with_step(start: TimeValue, step: TimeValue) -> Self {
        Self {
            state: Arc::new(ManualState {
                ticks: AtomicU64::new(start.ticks()),
                step: AtomicU64::new(step.ticks()),
            }),
        }
    }

    /// Build from the `[manual]` configuration table.
    #[must_use]
    pub fn from_config(config: &ManualClockConfig) -> Self {
        Self::with_step(config.start, config.step)
    }

    /// Current reading, without applying the step.
    #[must_use]
    pub fn peek(&self) -> TimeValue {
        TimeValue::from_ticks(self.state.ticks.load(Ordering::Acquire))
    }

    /// Jump to an absolute reading. Moving backwards is allowed.
    pub fn set(&self, to: TimeValue) {
        trace!(ticks = to.ticks(), "Manual clock set");
        self.state.ticks.store(to.ticks(), Ordering::Release);
    }

    /// Move forward by `by`, saturating at [`TimeValue::INFINITE`].
    ///
    /// Returns the new reading.
    pub fn advance(&self, by: TimeValue) -> TimeValue {
        let prev = self.fetch_saturating_add(by);
        prev + by
    }

    /// Auto-advance step.
    #[must_use]
    pub fn step(&self) -> TimeValue {
        TimeValue::from_ticks(self.state.step.load(Ordering::Acquire))
    }

    /// Change the auto-advance step. Zero freezes the clock.
    pub fn set_step(&self, step: TimeValue) {
        self.state.step.store(step.ticks(), Ordering::Release);
    }

    fn fetch_saturating_add(&self, by: TimeValue) -> TimeValue {
        let prev = self
            .state
            .ticks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |t| {
                Some((TimeValue::from_ticks(t) + by).ticks())
            })
            .unwrap_or_else(|t| t);
        TimeValue::from_ticks(prev)
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> TimeValue {
        let step = self.step();
        if step.is_zero() {
            self.peek()
        } else {
            self.fetch_saturating_add(step)
        }
    }
}
