//! Descriptive statistics for temperature readings
//!
//! Stateless functions over a borrowed reading sequence. Each call scans the
//! whole sequence and returns a fresh result; statistics that are undefined
//! for zero readings fail with [`EmptyInputError`](crate::EmptyInputError).
//!
//! # Example
//!
//! ```
//! use tempstats::statistics::{count, max, mean, min, variance};
//!
//! let readings = [20.5, 21.3, 19.8, 22.1, 20.9, 18.7, 23.4, 21.0];
//!
//! println!("Count: {}", count(&readings));
//! println!("Min: {:.2}", min(&readings)?);
//! println!("Max: {:.2}", max(&readings)?);
//! println!("Mean: {:.2}", mean(&readings)?);
//! println!("Variance: {:.4}", variance(&readings)?);
//! # Ok::<(), tempstats::EmptyInputError>(())
//! ```

mod descriptive;
mod summary;

pub use descriptive::{
    count, is_finite, max, mean, min, range, sample_stddev, sample_variance, stddev, sum,
    variance, Reading,
};
pub use summary::{summarize, Summary};
