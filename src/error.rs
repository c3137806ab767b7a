use thiserror::Error;

/// Bounds or precondition violation on cursor indices or window lengths.
///
/// Every kernel validates its inputs before reading a single sample, so a
/// call that returns one of these has produced no partial result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("end cursor {end} lies past the last sample (trace holds {len})")]
    EndPastTrace { end: usize, len: usize },
    #[error("begin cursor {begin} must lie before end cursor {end}")]
    BeginNotBeforeEnd { begin: usize, end: usize },
    #[error("window length must be at least one sampling point")]
    ZeroWindow,
    #[error("window of {window} sampling points does not fit between cursors {begin} and {end}")]
    WindowPastCursors {
        window: usize,
        begin: usize,
        end: usize,
    },
    #[error("window of {window} sampling points spans the whole trace ({len} samples)")]
    WindowPastTrace { window: usize, len: usize },
    #[error("averaging bin of {window} sampling points around cursors {begin}..={end} leaves the trace ({len} samples)")]
    BinPastTrace {
        window: usize,
        begin: usize,
        end: usize,
        len: usize,
    },
    #[error("peak centre {center} lies outside the cursor range {begin}..={end}")]
    CenterPastCursors {
        center: usize,
        begin: usize,
        end: usize,
    },
}
