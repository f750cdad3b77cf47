//! Saturating nanosecond time values.
//!
//! A [`TimeValue`] is an unsigned count of nanosecond ticks measured from an
//! epoch the value itself does not record. The same type is used for points in
//! time and for durations; callers keep track of which epoch a value belongs to.
//!
//! Every arithmetic operation is total. Results that would overflow clamp to
//! [`TimeValue::INFINITE`], results that would underflow (or divide by zero)
//! clamp to [`TimeValue::ZERO`]. Nothing in this module panics or wraps.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Number of ticks in one second.
pub const TICKS_PER_SECOND: u64 = 1_000_000_000;

/// Number of ticks in one millisecond.
pub const TICKS_PER_MS: u64 = TICKS_PER_SECOND / 1000;

/// Number of ticks in one microsecond.
pub const TICKS_PER_US: u64 = TICKS_PER_MS / 1000;

/// Nanosecond tick count relative to a caller-defined epoch.
///
/// The only way in or out of the raw representation is the
/// [`from_ticks`](Self::from_ticks) / [`ticks`](Self::ticks) pair, so all
/// arithmetic goes through the saturating operations below.
///
/// Ordering is the total order on tick counts, which makes the type usable as
/// a sort or priority-queue key. `Ord::max` and `Ord::min` give the later and
/// earlier of two values.
///
/// The ceiling, [`TimeValue::INFINITE`], is roughly 584 years past the epoch.
///
/// # Example
///
/// ```
/// use sectime_common::time::TimeValue;
///
/// let timeout = TimeValue::from_secs(10);
/// let elapsed = TimeValue::from_secs(25);
///
/// // Underflow clamps to zero rather than wrapping to ~584 years.
/// assert_eq!(timeout - elapsed, TimeValue::ZERO);
///
/// // Overflow clamps to "never".
/// assert_eq!(TimeValue::INFINITE + timeout, TimeValue::INFINITE);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeValue {
    ticks: u64,
}

impl TimeValue {
    /// The epoch, and the floor for underflowing operations.
    pub const ZERO: Self = Self::from_ticks(0);

    /// The saturation ceiling, treated as "never".
    pub const INFINITE: Self = Self::from_ticks(u64::MAX);

    /// One second.
    pub const SECOND: Self = Self::from_ticks(TICKS_PER_SECOND);

    /// One millisecond.
    pub const MILLISECOND: Self = Self::from_ticks(TICKS_PER_MS);

    /// One microsecond.
    pub const MICROSECOND: Self = Self::from_ticks(TICKS_PER_US);

    /// Wrap a raw tick count. Every `u64` is a valid tick count.
    #[inline]
    #[must_use]
    pub const fn from_ticks(ticks: u64) -> Self {
        Self { ticks }
    }

    /// Unwrap to the raw tick count.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.ticks
    }

    /// Returns [`TimeValue::ZERO`].
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns [`TimeValue::INFINITE`].
    #[inline]
    #[must_use]
    pub const fn infinite() -> Self {
        Self::INFINITE
    }

    /// True for the epoch value.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.ticks == 0
    }

    /// True for the saturation ceiling.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.ticks == u64::MAX
    }

    /// Whole seconds, saturating to infinite.
    #[inline]
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self::scaled(secs, TICKS_PER_SECOND)
    }

    /// Whole milliseconds, saturating to infinite.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self::scaled(ms, TICKS_PER_MS)
    }

    /// Whole microseconds, saturating to infinite.
    #[inline]
    #[must_use]
    pub const fn from_micros(us: u64) -> Self {
        Self::scaled(us, TICKS_PER_US)
    }

    /// Whole seconds, truncated.
    #[inline]
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.ticks / TICKS_PER_SECOND
    }

    /// Whole milliseconds, truncated.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.ticks / TICKS_PER_MS
    }

    /// Whole microseconds, truncated.
    #[inline]
    #[must_use]
    pub const fn as_micros(self) -> u64 {
        self.ticks / TICKS_PER_US
    }

    /// `self + rhs`, or [`TimeValue::INFINITE`] on overflow.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        match self.ticks.checked_add(rhs.ticks) {
            Some(ticks) => Self::from_ticks(ticks),
            None => Self::INFINITE,
        }
    }

    /// `self - rhs`, or [`TimeValue::ZERO`] when `rhs` is later than `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        match self.ticks.checked_sub(rhs.ticks) {
            Some(ticks) => Self::from_ticks(ticks),
            None => Self::ZERO,
        }
    }

    /// `|self - rhs|`.
    #[inline]
    #[must_use]
    pub const fn abs_diff(self, rhs: Self) -> Self {
        if self.ticks > rhs.ticks {
            self.saturating_sub(rhs)
        } else {
            rhs.saturating_sub(self)
        }
    }

    /// Scale by `factor`, or [`TimeValue::INFINITE`] on overflow.
    #[inline]
    #[must_use]
    pub const fn saturating_mul(self, factor: u64) -> Self {
        Self::scaled(self.ticks, factor)
    }

    /// Truncating division by `divisor`.
    ///
    /// Division by zero yields [`TimeValue::ZERO`], the same floor used for
    /// subtraction underflow.
    #[inline]
    #[must_use]
    pub const fn saturating_div(self, divisor: u64) -> Self {
        match self.ticks.checked_div(divisor) {
            Some(ticks) => Self::from_ticks(ticks),
            None => Self::ZERO,
        }
    }

    #[inline]
    const fn scaled(value: u64, factor: u64) -> Self {
        match value.checked_mul(factor) {
            Some(ticks) => Self::from_ticks(ticks),
            None => Self::INFINITE,
        }
    }
}

impl Add for TimeValue {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for TimeValue {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sub for TimeValue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl SubAssign for TimeValue {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.saturating_sub(rhs);
    }
}

impl Mul<u64> for TimeValue {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: u64) -> Self {
        self.saturating_mul(rhs)
    }
}

impl MulAssign<u64> for TimeValue {
    #[inline]
    fn mul_assign(&mut self, rhs: u64) {
        *self = self.saturating_mul(rhs);
    }
}

impl Div<u64> for TimeValue {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u64) -> Self {
        self.saturating_div(rhs)
    }
}

impl DivAssign<u64> for TimeValue {
    #[inline]
    fn div_assign(&mut self, rhs: u64) {
        *self = self.saturating_div(rhs);
    }
}

impl Sum for TimeValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a TimeValue> for TimeValue {
    fn sum<I: Iterator<Item = &'a TimeValue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
