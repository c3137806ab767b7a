//! Directional extremum search with optional binned-average smoothing.

use serde::{Deserialize, Serialize};

use crate::bounds;
use crate::error::RangeError;

/// Search policy for the peak kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Largest excursion above the baseline; never reported below zero.
    Up,
    /// Largest excursion below the baseline; never reported above zero.
    Down,
    /// Whichever excursion has the larger magnitude. An exact tie resolves
    /// to the positive excursion.
    Both,
}

/// Baseline-relative extremum and the sample index where it occurs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub amplitude: f64,
    pub index: usize,
}

/// Find the extremum of `trace` over `[begin, end]` relative to `baseline`.
///
/// Each candidate sample is smoothed with a binned average of
/// `averaging_window` consecutive samples centred on it (even windows lean
/// one sample forward); a window of 1 compares raw samples. Ties resolve to
/// the first occurrence in ascending index order.
///
/// The bin around every candidate must stay inside the trace, so
/// `begin >= (w-1)/2` and `end + w/2 <= len - 1` are validated along with
/// the cursor range itself.
pub fn peak(
    trace: &[f64],
    baseline: f64,
    begin: usize,
    end: usize,
    averaging_window: usize,
    direction: Direction,
) -> Result<Peak, RangeError> {
    bounds::check_peak_window(trace.len(), begin, end, averaging_window)?;
    let (left, _) = bounds::bin_reach(averaging_window);

    let mut high = f64::NEG_INFINITY;
    let mut high_at = begin;
    let mut low = f64::INFINITY;
    let mut low_at = begin;
    for i in begin..=end {
        let level = binned_average(trace, i - left, averaging_window);
        if level > high {
            high = level;
            high_at = i;
        }
        if level < low {
            low = level;
            low_at = i;
        }
    }

    // A search that never leaves the baseline on its side reports zero
    // rather than an excursion in the opposite sense.
    let up = (high - baseline).max(0.0);
    let down = (low - baseline).min(0.0);
    let found = match direction {
        Direction::Up => Peak {
            amplitude: up,
            index: high_at,
        },
        Direction::Down => Peak {
            amplitude: down,
            index: low_at,
        },
        Direction::Both => {
            if up.abs() >= down.abs() {
                Peak {
                    amplitude: up,
                    index: high_at,
                }
            } else {
                Peak {
                    amplitude: down,
                    index: low_at,
                }
            }
        }
    };
    Ok(found)
}

/// Mean of `window` consecutive samples starting at `start`.
fn binned_average(trace: &[f64], start: usize, window: usize) -> f64 {
    trace[start..start + window].iter().sum::<f64>() / window as f64
}
