//! Maximal slope of rise and decay via windowed forward differences.

use serde::{Deserialize, Serialize};

use crate::bounds;
use crate::error::RangeError;

/// Winning slope magnitude, its fractional location and the interpolated
/// amplitude at that location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlopeExtremum {
    /// Slope in amplitude units per sampling point. Both kernels report the
    /// magnitude of their winning slope as a positive number.
    pub slope: f64,
    /// Midpoint of the winning window, `i + window/2`; a half-integer for
    /// odd windows.
    pub position: f64,
    /// Linear interpolation between the two samples of the winning window.
    pub amplitude: f64,
}

/// Steepest upward slope over `[begin, end]`.
pub fn max_rise(
    trace: &[f64],
    begin: usize,
    end: usize,
    window: usize,
) -> Result<SlopeExtremum, RangeError> {
    steepest(trace, begin, end, window, 1.0)
}

/// Steepest downward slope over `[begin, end]`, reported as a positive
/// magnitude.
pub fn max_decay(
    trace: &[f64],
    begin: usize,
    end: usize,
    window: usize,
) -> Result<SlopeExtremum, RangeError> {
    steepest(trace, begin, end, window, -1.0)
}

/// Shared scan over the forward differences
/// `(trace[i + window] - trace[i]) / window` for `i` in `[begin, end - window]`.
/// `sign` of -1 flips the differences so decays compete as positive values,
/// keeping the first-occurrence tie-break in ascending scan order for both
/// kernels. On an all-flat trace every candidate ties at zero and the first
/// admissible window wins.
fn steepest(
    trace: &[f64],
    begin: usize,
    end: usize,
    window: usize,
    sign: f64,
) -> Result<SlopeExtremum, RangeError> {
    bounds::check_slope_window(trace.len(), begin, end, window)?;
    let mut best = f64::NEG_INFINITY;
    let mut best_at = begin;
    for i in begin..=end - window {
        let slope = sign * (trace[i + window] - trace[i]) / window as f64;
        if slope > best {
            best = slope;
            best_at = i;
        }
    }
    Ok(SlopeExtremum {
        slope: best,
        position: best_at as f64 + window as f64 / 2.0,
        amplitude: (trace[best_at] + trace[best_at + window]) / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(len: usize, at: usize) -> Vec<f64> {
        let mut data = vec![0.0; len];
        data[at] = 1.0;
        data
    }

    #[test]
    fn impulse_rise_sits_half_a_point_before_the_spike() {
        let data = impulse(32768, 16385);
        let s = max_rise(&data, 1, data.len() - 1, 1).unwrap();
        assert_eq!(s.slope, 1.0);
        assert_eq!(s.position, 16384.5);
        assert_eq!(s.amplitude, 0.5);
    }

    #[test]
    fn impulse_decay_sits_half_a_point_after_the_spike() {
        let data = impulse(32768, 16385);
        let s = max_decay(&data, 0, data.len() - 1, 1).unwrap();
        assert_eq!(s.slope, 1.0);
        assert_eq!(s.position, 16385.5);
        assert_eq!(s.amplitude, 0.5);
    }

    #[test]
    fn flat_trace_ties_break_to_first_window() {
        let data = vec![0.0; 256];
        let s = max_rise(&data, 10, 200, 4).unwrap();
        assert_eq!(s.slope, 0.0);
        assert_eq!(s.position, 12.0);
        assert_eq!(s.amplitude, 0.0);

        let d = max_decay(&data, 10, 200, 4).unwrap();
        assert_eq!(d.position, 12.0);
    }

    #[test]
    fn wider_window_averages_the_difference() {
        let data = [0.0, 0.0, 1.0, 3.0, 3.0, 3.0];
        // Window 2 over [1, 3]: steepest pair is samples 1 and 3.
        let s = max_rise(&data, 0, 5, 2).unwrap();
        assert_eq!(s.slope, 1.5);
        assert_eq!(s.position, 2.0);
        assert_eq!(s.amplitude, 1.5);
    }

    #[test]
    fn rejects_out_of_range_cursors() {
        let data = vec![0.0; 32768];
        assert!(max_rise(&data, 0, data.len(), 1).is_err());
        assert!(max_rise(&data, usize::MAX, data.len() - 1, 1).is_err());
        assert!(max_decay(&data, data.len(), data.len() - 1, 1).is_err());
    }

    #[test]
    fn rejects_windows_that_do_not_fit() {
        let data = vec![0.0; 32768];
        let window = 10;
        // End cursor must lie more than a window past the begin cursor.
        assert!(max_rise(&data, 0, window - 1, window).is_err());
        assert!(max_decay(&data, 0, window - 1, window).is_err());
        // Symmetric failure when the cursors hug the other edge.
        assert!(max_rise(&data, data.len() - window, data.len() - 1, window).is_err());
        // The window may never span the whole trace.
        assert!(max_rise(&data, 0, data.len() - 1, data.len() + 1).is_err());
        assert!(max_decay(&data, 0, data.len() - 1, data.len() + 1).is_err());
    }
}
