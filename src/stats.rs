//! Interval statistics

use serde::{Deserialize, Serialize};

pub const SECONDS_IN_HOUR: f64 = 60.0 * 60.0;
pub const SECONDS_IN_DAY: f64 = SECONDS_IN_HOUR * 24.0;

/// Mean and sample standard deviation of a set of interval samples.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    pub standard_deviation: f64,
}

impl Statistics {
    /// Upper estimate covering most observed gaps: mean plus one
    /// standard deviation.
    #[must_use]
    pub fn majority(&self) -> f64 {
        self.mean + self.standard_deviation
    }
}

/// Computes statistics over a non-empty sample set.
///
/// A single sample has no spread, so its standard deviation is 0. With two
/// or more samples the standard deviation is Bessel-corrected (n - 1
/// divisor). Total over its precondition; callers handle the empty case.
#[must_use]
pub fn compute(values: &[f64]) -> Statistics {
    if values.len() > 1 {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Statistics {
            mean,
            standard_deviation: variance.sqrt(),
        }
    } else {
        Statistics {
            mean: values[0],
            standard_deviation: 0.0,
        }
    }
}
