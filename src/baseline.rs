//! Baseline estimation over a reference cursor range.

use serde::{Deserialize, Serialize};

use crate::bounds;
use crate::error::RangeError;

/// Mean level and population variance of the reference range.
///
/// Downstream kernels take the mean as their baseline parameter; the
/// variance is reported alongside for noise estimates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub mean: f64,
    pub variance: f64,
}

/// Arithmetic mean and variance of the inclusive range `[begin, end]`.
///
/// Requires `begin < end`: a single sample is not a baseline estimate.
pub fn base(trace: &[f64], begin: usize, end: usize) -> Result<Baseline, RangeError> {
    bounds::check_span(trace.len(), begin, end)?;
    let slice = &trace[begin..=end];
    let n = slice.len() as f64;
    let mean = slice.iter().sum::<f64>() / n;
    let variance = slice
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;
    Ok(Baseline { mean, variance })
}
