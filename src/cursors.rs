//! Cursor ranges and settings supplied by the surrounding application, and
//! the one-shot summary pass that runs every kernel over them.
//!
//! The kernels themselves stay independent; this module only chains their
//! scalar outputs the way an interactive caller fills its results table:
//! the baseline feeds the peak search, the measured peak feeds the rise
//! time and half width.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::baseline::{self, Baseline};
use crate::error::RangeError;
use crate::halfwidth::{self, HalfWidth};
use crate::peak::{self, Direction, Peak};
use crate::risetime::{self, RiseTime};
use crate::slope::{self, SlopeExtremum};

/// Inclusive cursor pairs, in sampling points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    pub base_begin: usize,
    pub base_end: usize,
    pub peak_begin: usize,
    pub peak_end: usize,
    pub slope_begin: usize,
    pub slope_end: usize,
}

/// Measurement settings mirrored from the cursor configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureSettings {
    pub direction: Direction,
    /// Number of points for the binned average during peak detection.
    pub peak_points: usize,
    /// Forward-difference span for the slope kernels, in sampling points.
    pub slope_window: usize,
    /// Lower relative-amplitude threshold for the rise time (0.2 = 20/80).
    pub lower_fraction: f64,
}

impl Default for MeasureSettings {
    fn default() -> Self {
        Self {
            direction: Direction::Both,
            peak_points: 1,
            slope_window: 1,
            lower_fraction: 0.2,
        }
    }
}

/// Everything one measurement pass produces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    pub baseline: Baseline,
    pub peak: Peak,
    pub rise: RiseTime,
    pub half_width: HalfWidth,
    pub max_rise: SlopeExtremum,
    pub max_decay: SlopeExtremum,
}

/// Run the full measurement pass over one trace.
///
/// Any cursor or window violation from the underlying kernels propagates
/// unchanged.
pub fn summarize(
    trace: &[f64],
    cursors: &Cursors,
    settings: &MeasureSettings,
) -> Result<TraceSummary, RangeError> {
    let baseline = baseline::base(trace, cursors.base_begin, cursors.base_end)?;
    let peak = peak::peak(
        trace,
        baseline.mean,
        cursors.peak_begin,
        cursors.peak_end,
        settings.peak_points,
        settings.direction,
    )?;
    let rise = risetime::risetime(
        trace,
        baseline.mean,
        peak.amplitude,
        cursors.peak_begin,
        cursors.peak_end,
        settings.lower_fraction,
    )?;
    let half_width = halfwidth::half_width(
        trace,
        baseline.mean,
        peak.amplitude,
        cursors.peak_begin,
        cursors.peak_end,
        peak.index,
    )?;
    let max_rise = slope::max_rise(
        trace,
        cursors.slope_begin,
        cursors.slope_end,
        settings.slope_window,
    )?;
    let max_decay = slope::max_decay(
        trace,
        cursors.slope_begin,
        cursors.slope_end,
        settings.slope_window,
    )?;
    debug!(
        "trace summary: base {:.6} (var {:.6}), peak {:.6} @ {}, rise {} pts, half width {:.3} pts",
        baseline.mean,
        baseline.variance,
        peak.amplitude,
        peak.index,
        rise.sample_span(),
        half_width.width()
    );
    Ok(TraceSummary {
        baseline,
        peak,
        rise,
        half_width,
        max_rise,
        max_decay,
    })
}
