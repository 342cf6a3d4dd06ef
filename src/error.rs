//! Error type for the statistics engine
//!
//! The engine has exactly one failure mode: asking for a statistic that is
//! undefined on zero readings.

/// A statistic that needs at least one reading was given none
///
/// Returned by every statistic except [`count`](crate::statistics::count)
/// and [`sum`](crate::statistics::sum), which are defined for empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyInputError;

impl core::fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "input sequence must not be empty")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyInputError {}

/// Result of a statistic computation
pub type Result<T, E = EmptyInputError> = core::result::Result<T, E>;

/// Fail with [`EmptyInputError`] when `readings` is empty
#[inline]
pub(crate) fn ensure_non_empty(readings: &[f64]) -> Result<()> {
    if readings.is_empty() {
        log::debug!("rejecting empty reading sequence");
        Err(EmptyInputError)
    } else {
        Ok(())
    }
}
