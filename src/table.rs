//! Fixed function table for host bindings
//!
//! Hosts that expose the engine under string names (a scripting bridge, an
//! FFI shim, a command dispatcher) look statistics up here instead of
//! registering them in a global namespace. The table is static and its
//! order is stable.
//!
//! ```
//! use tempstats::table::{Statistic, Value};
//!
//! let readings = [20.5, 21.3, 19.8];
//!
//! let stat = Statistic::from_name("min_temp").unwrap();
//! assert_eq!(stat.evaluate(&readings), Ok(Value::Real(19.8)));
//!
//! for stat in Statistic::ALL {
//!     println!("{}: {}", stat.name(), stat.description());
//! }
//! ```

use crate::error::Result;
use crate::statistics::{self, Reading};

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// An exported statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Count,
    Min,
    Max,
    Mean,
    Variance,
}

impl Statistic {
    /// Every exported statistic, in table order
    pub const ALL: [Statistic; 5] = [
        Statistic::Count,
        Statistic::Min,
        Statistic::Max,
        Statistic::Mean,
        Statistic::Variance,
    ];

    /// Exported symbol name
    pub const fn name(self) -> &'static str {
        match self {
            Statistic::Count => "count_readings",
            Statistic::Min => "min_temp",
            Statistic::Max => "max_temp",
            Statistic::Mean => "avg_temp",
            Statistic::Variance => "variance_temp",
        }
    }

    /// One-line help text
    pub const fn description(self) -> &'static str {
        match self {
            Statistic::Count => "Returns the number of temperature readings",
            Statistic::Min => "Returns the minimum temperature of the readings",
            Statistic::Max => "Returns the maximum temperature of the readings",
            Statistic::Mean => "Returns the average temperature of the readings",
            Statistic::Variance => "Returns the population variance of the readings",
        }
    }

    /// Look a statistic up by its exported name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.name() == name)
    }

    /// Whether the statistic is defined for an empty sequence
    pub const fn accepts_empty(self) -> bool {
        matches!(self, Statistic::Count)
    }

    /// Compute this statistic over `readings`
    pub fn evaluate(self, readings: &[Reading]) -> Result<Value> {
        log::trace!("evaluating {} over {} readings", self.name(), readings.len());
        match self {
            Statistic::Count => Ok(Value::Count(statistics::count(readings))),
            Statistic::Min => statistics::min(readings).map(Value::Real),
            Statistic::Max => statistics::max(readings).map(Value::Real),
            Statistic::Mean => statistics::mean(readings).map(Value::Real),
            Statistic::Variance => statistics::variance(readings).map(Value::Real),
        }
    }

    /// Evaluate the whole table, one result per entry
    pub fn evaluate_all(readings: &[Reading]) -> Vec<(Statistic, Result<Value>)> {
        Self::ALL
            .into_iter()
            .map(|stat| (stat, stat.evaluate(readings)))
            .collect()
    }
}

impl core::fmt::Display for Statistic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Statistic {
    type Err = UnknownStatistic;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStatistic(String::from(s)))
    }
}

/// Result of a table lookup for a name that is not exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatistic(pub String);

impl core::fmt::Display for UnknownStatistic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown statistic: {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownStatistic {}

/// Scalar produced by a [`Statistic`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Integer result (count)
    Count(usize),
    /// Real-valued result
    Real(f64),
}

impl Value {
    /// The value as a float
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Count(n) => n as f64,
            Value::Real(x) => x,
        }
    }

    /// The count, if this is an integer result
    pub fn as_count(self) -> Option<usize> {
        match self {
            Value::Count(n) => Some(n),
            Value::Real(_) => None,
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Count(n) => write!(f, "{}", n),
            Value::Real(x) => write!(f, "{}", x),
        }
    }
}
