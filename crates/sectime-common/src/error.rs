use crate::config::ClockKind;
use thiserror::Error;

/// Conversion errors into [`TimeValue`](crate::time::TimeValue).
///
/// Arithmetic on time values never fails; only decoding an external
/// representation can.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// Seconds field was negative.
    #[error("negative seconds: {0}")]
    NegativeSeconds(i64),

    /// Nanoseconds field was outside `0..1_000_000_000`.
    #[error("nanoseconds out of range: {0}")]
    NanosOutOfRange(i64),
}

/// OS clock read failures.
///
/// These never reach callers of `now()`, which falls back to the epoch; they
/// are surfaced by the explicit `try_now()` path and logged otherwise.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The OS refused the clock read.
    #[error("failed to read {clock} clock: {source}")]
    Read {
        /// Clock that was queried.
        clock: ClockKind,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The OS returned a reading that is not a valid time value.
    #[error("{clock} clock returned an unrepresentable reading: {source}")]
    Conversion {
        /// Clock that was queried.
        clock: ClockKind,
        /// Decoding failure.
        #[source]
        source: TimeError,
    },
}

/// Convenience type alias for clock reads.
pub type ClockResult<T> = Result<T, ClockError>;
