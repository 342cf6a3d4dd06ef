//! # Tempstats
//!
//! Descriptive statistics over sequences of temperature readings.
//!
//! Tempstats is a small, stateless statistics engine meant to be called
//! repeatedly from a host application, typically once per new sensor sample.
//! Every call borrows the full reading sequence, scans it, and returns a
//! fresh result. Nothing is retained between calls.
//!
//! ## Features
//!
//! - **Count, min, max, mean, variance** over `&[f64]`
//! - **Typed errors**: statistics undefined for zero readings return
//!   [`EmptyInputError`] instead of a sentinel
//! - **Numerical stability**: compensated summation and a two-pass variance
//! - **Summaries**: every statistic from one call with [`Summary`]
//! - **Function table**: stable exported names for host bindings in [`table`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tempstats::prelude::*;
//!
//! let readings = [20.5, 21.3, 19.8, 22.1, 20.9, 18.7, 23.4, 21.0];
//!
//! assert_eq!(count(&readings), 8);
//! assert_eq!(min(&readings), Ok(18.7));
//! assert_eq!(max(&readings), Ok(23.4));
//! println!("Average temperature: {:.2}°C", mean(&readings)?);
//! println!("Variance: {:.4}", variance(&readings)?);
//!
//! // Empty input is an error, never a silent default
//! assert_eq!(mean(&[]), Err(EmptyInputError));
//! # Ok::<(), EmptyInputError>(())
//! ```
//!
//! ## Variance convention
//!
//! [`variance`](statistics::variance) is the population variance (divisor
//! `n`). The Bessel-corrected estimator (divisor `n - 1`) is available as
//! [`sample_variance`](statistics::sample_variance).
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` and uses `libm` for square roots
//! - `serde`: Serialization for [`Summary`] and [`table::Value`]

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
mod math;
pub mod statistics;
pub mod table;

pub mod prelude {
    pub use crate::error::EmptyInputError;
    pub use crate::statistics::{
        count, max, mean, min, sample_variance, summarize, variance, Reading, Summary,
    };
    pub use crate::table::{Statistic, Value};
}

pub use error::{EmptyInputError, Result};
pub use statistics::Summary;
