//! Measurement kernels for sampled electrophysiology traces.
//!
//! Every kernel borrows a caller-owned waveform (`&[f64]`, one amplitude per
//! sampling point), validates its cursor range before reading anything, and
//! returns a scalar feature plus a location where one is meaningful.
//! Locations are fractional sample indices; converting to physical time via
//! the sampling interval is the caller's job. Kernels keep no state between
//! calls and are safe to run from multiple threads over a shared trace.

pub mod baseline;
pub mod bounds;
pub mod cursors;
pub mod error;
pub mod halfwidth;
pub mod peak;
pub mod risetime;
pub mod slope;
pub mod threshold;

pub use baseline::{base, Baseline};
pub use cursors::{summarize, Cursors, MeasureSettings, TraceSummary};
pub use error::RangeError;
pub use halfwidth::{half_width, HalfWidth};
pub use peak::{peak, Direction, Peak};
pub use risetime::{risetime, RiseTime};
pub use slope::{max_decay, max_rise, SlopeExtremum};
pub use threshold::{slope_threshold, ThresholdCrossing};
