//! Numeric helpers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Neumaier compensated accumulator
///
/// Improved Kahan summation: the running compensation also captures the
/// low-order bits lost when an addend is larger in magnitude than the
/// running sum, so the total error stays O(ε) regardless of length.
///
/// Non-finite addends follow IEEE-754: the compensation term is dropped once
/// the sum leaves the finite range, so `inf` and `NaN` propagate unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value
    #[inline]
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if abs(self.sum) >= abs(value) {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Current total
    #[inline]
    pub fn total(&self) -> f64 {
        if self.sum.is_finite() {
            self.sum + self.compensation
        } else {
            self.sum
        }
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compensated_sum_basic() {
        let acc: CompensatedSum = [1.0, 2.0, 3.0].into_iter().collect();
        assert_eq!(acc.total(), 6.0);
    }

    #[test]
    fn test_compensated_sum_recovers_small_terms() {
        // Naive summation loses the 1.0 entirely
        let values = [1e100, 1.0, -1e100];
        let naive: f64 = values.iter().sum();
        assert_eq!(naive, 0.0);

        let acc: CompensatedSum = values.into_iter().collect();
        assert_eq!(acc.total(), 1.0);
    }

    #[test]
    fn test_compensated_sum_many_small() {
        let acc: CompensatedSum = core::iter::repeat(0.1).take(10).collect();
        assert_eq!(acc.total(), 1.0);
    }

    #[test]
    fn test_compensated_sum_non_finite() {
        let acc: CompensatedSum = [1.0, f64::INFINITY, 2.0].into_iter().collect();
        assert_eq!(acc.total(), f64::INFINITY);

        let acc: CompensatedSum = [f64::INFINITY, f64::NEG_INFINITY].into_iter().collect();
        assert!(acc.total().is_nan());

        let acc: CompensatedSum = [1.0, f64::NAN].into_iter().collect();
        assert!(acc.total().is_nan());
    }

    #[test]
    fn test_empty() {
        assert_eq!(CompensatedSum::new().total(), 0.0);
    }
}
