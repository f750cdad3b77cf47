//! Clock source acceptance tests.
//!
//! # Acceptance Criteria
//!
//! - Successive OS clock reads on one thread never decrease
//! - Timeouts built on the manual clock expire exactly at their deadline
//! - Saturated timeouts never expire; zero timeouts expire immediately

use super::common::{init_tracing, TestTimeout};
use sectime_clock::{now, ClockSource, ManualClock, MonotonicClock};
use sectime_common::{ClockKind, TimeValue};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_now_non_decreasing() {
    init_tracing();

    let first = now();
    let second = now();
    assert!(second >= first);
}

#[test]
fn test_now_advances_across_sleep() {
    let start = now();
    thread::sleep(Duration::from_millis(5));
    let elapsed = MonotonicClock::new().elapsed_since(start);
    assert!(
        elapsed >= TimeValue::from_millis(5),
        "expected at least 5ms, got {}us",
        elapsed.as_micros()
    );
}

#[test]
fn test_clock_kinds_agree_on_direction() {
    for kind in [ClockKind::Monotonic, ClockKind::MonotonicRaw, ClockKind::Boottime] {
        let clock = MonotonicClock::with_kind(kind);
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "{kind} went backwards");
    }
}

#[test]
fn test_timeout_on_manual_clock() {
    let clock = ManualClock::new(TimeValue::from_secs(100));
    let timeout = TestTimeout::start(clock.clone(), TimeValue::from_secs(10));

    assert_eq!(timeout.deadline(), TimeValue::from_secs(110));
    assert!(!timeout.expired());

    clock.advance(TimeValue::from_secs(9));
    assert_eq!(timeout.remaining(), TimeValue::from_secs(1));
    assert!(!timeout.expired());

    clock.advance(TimeValue::from_secs(1));
    assert!(timeout.expired());
    assert_eq!(timeout.remaining(), TimeValue::ZERO);

    // Past the deadline, remaining stays at zero instead of wrapping.
    clock.advance(TimeValue::from_secs(1000));
    assert_eq!(timeout.remaining(), TimeValue::ZERO);
}

#[test]
fn test_huge_timeout_never_expires() {
    let clock = ManualClock::new(TimeValue::from_secs(100));
    let timeout = TestTimeout::start(clock.clone(), TimeValue::INFINITE);

    assert!(timeout.deadline().is_infinite());
    clock.set(TimeValue::from_ticks(u64::MAX - 1));
    assert!(!timeout.expired());
    clock.advance(TimeValue::SECOND);
    assert!(!timeout.expired());
}

#[test]
fn test_zero_timeout_expires_immediately() {
    let clock = ManualClock::new(TimeValue::from_secs(3));
    let timeout = TestTimeout::start(clock, TimeValue::ZERO);
    assert!(timeout.expired());
}

#[test]
fn test_shared_clock_across_threads() {
    let clock: Arc<dyn ClockSource> = Arc::new(MonotonicClock::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                let start = clock.now();
                let end = clock.now();
                end >= start
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("reader thread panicked"));
    }
}
