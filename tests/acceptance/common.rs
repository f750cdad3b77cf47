//! Common utilities for integration tests.
//!
//! Provides helpers for:
//! - Installing a tracing subscriber once per test binary
//! - A timeout tracker built on the saturating time API

#![allow(dead_code)] // Not every helper is used by every test module

use sectime_clock::ClockSource;
use sectime_common::TimeValue;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route library logs to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Timeout tracker of the kind downstream protocol code builds.
///
/// The deadline is `start + timeout`, computed with saturating addition, so a
/// huge timeout becomes "never" instead of wrapping into the past.
pub struct TestTimeout<C: ClockSource> {
    /// Clock readings come from here.
    clock: C,
    /// Absolute expiry time.
    deadline: TimeValue,
}

impl<C: ClockSource> TestTimeout<C> {
    /// Arm a timeout `timeout` from now.
    pub fn start(clock: C, timeout: TimeValue) -> Self {
        let deadline = clock.now() + timeout;
        Self { clock, deadline }
    }

    /// Absolute expiry time.
    pub fn deadline(&self) -> TimeValue {
        self.deadline
    }

    /// Time left before expiry; zero once expired.
    pub fn remaining(&self) -> TimeValue {
        self.deadline - self.clock.now()
    }

    /// Whether the deadline has passed.
    pub fn expired(&self) -> bool {
        !self.deadline.is_infinite() && self.clock.now() >= self.deadline
    }
}
