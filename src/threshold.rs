//! Event-onset detection: first windowed-slope crossing of a threshold.

use serde::{Deserialize, Serialize};

use crate::bounds;
use crate::error::RangeError;

/// Sample at which the windowed slope first reached the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCrossing {
    /// Amplitude at the top of the winning window.
    pub amplitude: f64,
    /// Index of the sample at the top of the winning window.
    pub index: usize,
}

/// First position in `[begin, end - window]` whose forward-difference slope
/// reaches `threshold`, in amplitude units per sampling point.
///
/// `Ok(None)` when the slope never gets there; absence of an onset is a
/// normal outcome, not a bounds violation.
pub fn slope_threshold(
    trace: &[f64],
    begin: usize,
    end: usize,
    window: usize,
    threshold: f64,
) -> Result<Option<ThresholdCrossing>, RangeError> {
    bounds::check_slope_window(trace.len(), begin, end, window)?;
    for i in begin..=end - window {
        let slope = (trace[i + window] - trace[i]) / window as f64;
        if slope >= threshold {
            return Ok(Some(ThresholdCrossing {
                amplitude: trace[i + window],
                index: i + window,
            }));
        }
    }
    Ok(None)
}
