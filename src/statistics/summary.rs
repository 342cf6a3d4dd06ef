//! All statistics from one call
//!
//! Hosts that want every figure for a reading sequence (for example after
//! appending a new sensor sample) can compute them together in two scans
//! instead of one call per statistic.

use super::descriptive::{squared_deviations, Reading, Scan};
use crate::error::Result;
use crate::math;

/// Descriptive summary of a non-empty reading sequence
///
/// Every field matches the value the corresponding free function in
/// [`statistics`](crate::statistics) returns for the same readings.
///
/// # Example
///
/// ```
/// use tempstats::statistics::Summary;
///
/// let readings = [20.5, 21.3, 19.8, 22.1, 20.9, 18.7, 23.4, 21.0];
/// let summary = Summary::from_readings(&readings).unwrap();
///
/// assert_eq!(summary.count, 8);
/// assert_eq!(summary.min, 18.7);
/// assert_eq!(summary.max, 23.4);
/// assert!((summary.mean - 20.9625).abs() < 1e-12);
/// assert!((summary.variance - 1.75484375).abs() < 1e-12);
///
/// assert!(Summary::from_readings(&[]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of readings
    pub count: usize,
    /// Smallest reading
    pub min: f64,
    /// Largest reading
    pub max: f64,
    /// Compensated sum
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (divisor `n`)
    pub variance: f64,
    /// Sample variance (divisor `n - 1`)
    pub sample_variance: f64,
}

impl Summary {
    /// Summarize a reading sequence
    ///
    /// Fails with [`EmptyInputError`](crate::EmptyInputError) when
    /// `readings` is empty.
    pub fn from_readings(readings: &[Reading]) -> Result<Self> {
        let scan = Scan::new(readings)?;
        let n = readings.len();

        let (variance, sample_variance) = if n == 1 {
            (0.0, 0.0)
        } else {
            let m2 = squared_deviations(readings, scan.mean);
            (m2 / n as f64, m2 / (n - 1) as f64)
        };

        Ok(Self {
            count: n,
            min: scan.min,
            max: scan.max,
            sum: scan.sum,
            mean: scan.mean,
            variance,
            sample_variance,
        })
    }

    /// Population standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance)
    }

    /// Sample standard deviation
    pub fn sample_stddev(&self) -> f64 {
        math::sqrt(self.sample_variance)
    }

    /// Spread between the largest and smallest reading
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Shorthand for [`Summary::from_readings`]
pub fn summarize(readings: &[Reading]) -> Result<Summary> {
    Summary::from_readings(readings)
}

impl TryFrom<&[Reading]> for Summary {
    type Error = crate::error::EmptyInputError;

    fn try_from(readings: &[Reading]) -> Result<Self> {
        Self::from_readings(readings)
    }
}
