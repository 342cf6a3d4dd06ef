//! Descriptive statistics over a reading sequence
//!
//! Every function borrows the readings for the duration of the call, scans
//! them linearly and returns a fresh scalar. Nothing is cached between calls.
//!
//! # Non-finite readings
//!
//! Readings are ordinary IEEE-754 values and are never filtered:
//!
//! - [`min`] and [`max`] return NaN if any reading is NaN, wherever it sits
//!   in the sequence. Infinities compare normally.
//! - [`mean`] and the variances follow IEEE arithmetic, so a NaN or a pair
//!   of opposite infinities yields NaN.
//! - The variance of a single reading is always exactly `0.0`.
//! - Signed zeros are ordered `-0.0 < +0.0` by [`min`] and [`max`], so the
//!   extremes of `[0.0, -0.0]` do not depend on input order.
//! - Finite readings whose sum overflows still get a finite [`mean`]: the
//!   sum is recomputed over `x / n`.
//!
//! Use [`is_finite`] to reject such input up front.

use crate::error::{ensure_non_empty, Result};
use crate::math::{self, CompensatedSum};

/// One temperature sample
pub type Reading = f64;

/// First-pass aggregate shared by `mean`, the variances and `Summary`
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scan {
    pub(crate) sum: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) mean: f64,
}

impl Scan {
    /// Single pass over a non-empty sequence
    pub(crate) fn new(readings: &[Reading]) -> Result<Self> {
        ensure_non_empty(readings)?;

        let mut acc = CompensatedSum::new();
        let mut lo = readings[0];
        let mut hi = readings[0];
        for &x in readings {
            acc.add(x);
            lo = lesser(lo, x);
            hi = greater(hi, x);
        }

        let sum = acc.total();
        let n = readings.len() as f64;
        let mean = if sum.is_finite() {
            bounded(sum / n, lo, hi)
        } else if lo.is_finite() && hi.is_finite() {
            // Finite readings, overflowed sum
            let scaled: CompensatedSum = readings.iter().map(|&x| x / n).collect();
            bounded(scaled.total(), lo, hi)
        } else {
            sum / n
        };
        Ok(Self {
            sum,
            min: lo,
            max: hi,
            mean,
        })
    }
}

/// NaN-sticky minimum of two values; `-0.0` wins a tie with `+0.0`
#[inline]
fn lesser(acc: f64, x: f64) -> f64 {
    if acc.is_nan() {
        acc
    } else if x.is_nan() || x < acc || (x == acc && x.is_sign_negative()) {
        x
    } else {
        acc
    }
}

/// NaN-sticky maximum of two values; `+0.0` wins a tie with `-0.0`
#[inline]
fn greater(acc: f64, x: f64) -> f64 {
    if acc.is_nan() {
        acc
    } else if x.is_nan() || x > acc || (x == acc && x.is_sign_positive()) {
        x
    } else {
        acc
    }
}

/// Pull a rounded mean back into `[lo, hi]`
///
/// The exact mean always lies within the extremes; rounding of the final
/// division can push it one ulp outside. NaN passes through untouched.
#[inline]
fn bounded(mean: f64, lo: f64, hi: f64) -> f64 {
    if mean < lo {
        lo
    } else if mean > hi {
        hi
    } else {
        mean
    }
}

/// Sum of squared deviations from `mean` (second pass)
pub(crate) fn squared_deviations(readings: &[Reading], mean: f64) -> f64 {
    readings
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .collect::<CompensatedSum>()
        .total()
}

/// Number of readings
///
/// Defined for every sequence, including the empty one.
///
/// ```
/// use tempstats::statistics::count;
///
/// assert_eq!(count(&[20.5, 21.3, 19.8]), 3);
/// assert_eq!(count(&[]), 0);
/// ```
#[inline]
pub fn count(readings: &[Reading]) -> usize {
    readings.len()
}

/// Compensated sum of all readings; `0.0` for an empty sequence
pub fn sum(readings: &[Reading]) -> f64 {
    readings.iter().copied().collect::<CompensatedSum>().total()
}

/// Smallest reading
///
/// ```
/// use tempstats::statistics::min;
/// use tempstats::EmptyInputError;
///
/// assert_eq!(min(&[20.5, 18.7, 23.4]), Ok(18.7));
/// assert_eq!(min(&[]), Err(EmptyInputError));
/// ```
pub fn min(readings: &[Reading]) -> Result<f64> {
    ensure_non_empty(readings)?;
    Ok(readings.iter().copied().fold(readings[0], lesser))
}

/// Largest reading
///
/// ```
/// use tempstats::statistics::max;
/// use tempstats::EmptyInputError;
///
/// assert_eq!(max(&[20.5, 18.7, 23.4]), Ok(23.4));
/// assert_eq!(max(&[]), Err(EmptyInputError));
/// ```
pub fn max(readings: &[Reading]) -> Result<f64> {
    ensure_non_empty(readings)?;
    Ok(readings.iter().copied().fold(readings[0], greater))
}

/// Spread between the largest and smallest reading
pub fn range(readings: &[Reading]) -> Result<f64> {
    let scan = Scan::new(readings)?;
    Ok(scan.max - scan.min)
}

/// Arithmetic mean, `sum / count`
///
/// The sum is compensated and the result is kept within `[min, max]`.
///
/// ```
/// use tempstats::statistics::mean;
///
/// let readings = [20.5, 21.3, 19.8, 22.1, 20.9, 18.7, 23.4, 21.0];
/// assert!((mean(&readings).unwrap() - 20.9625).abs() < 1e-12);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(readings: &[Reading]) -> Result<f64> {
    Ok(Scan::new(readings)?.mean)
}

/// Population variance, `sum((x - mean)^2) / n`
///
/// Two passes: one for the mean, one for the squared deviations. A single
/// reading has variance exactly `0.0`. For the Bessel-corrected estimator
/// use [`sample_variance`].
///
/// ```
/// use tempstats::statistics::variance;
///
/// let readings = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&readings), Ok(4.0));
/// assert_eq!(variance(&[25.5]), Ok(0.0));
/// ```
pub fn variance(readings: &[Reading]) -> Result<f64> {
    let scan = Scan::new(readings)?;
    if readings.len() == 1 {
        return Ok(0.0);
    }
    Ok(squared_deviations(readings, scan.mean) / readings.len() as f64)
}

/// Sample variance with Bessel's correction, `sum((x - mean)^2) / (n - 1)`
///
/// A single reading has sample variance `0.0`.
pub fn sample_variance(readings: &[Reading]) -> Result<f64> {
    let scan = Scan::new(readings)?;
    if readings.len() == 1 {
        return Ok(0.0);
    }
    Ok(squared_deviations(readings, scan.mean) / (readings.len() - 1) as f64)
}

/// Population standard deviation
pub fn stddev(readings: &[Reading]) -> Result<f64> {
    variance(readings).map(math::sqrt)
}

/// Sample standard deviation
pub fn sample_stddev(readings: &[Reading]) -> Result<f64> {
    sample_variance(readings).map(math::sqrt)
}

/// Check that every reading is finite (neither NaN nor infinite)
///
/// Vacuously true for an empty sequence.
pub fn is_finite(readings: &[Reading]) -> bool {
    readings.iter().all(|x| x.is_finite())
}
