//! Error kinds for grid and line-buffer operations.
//!
//! All failures are local and synchronous. They indicate a protocol
//! mismatch with the editor backend, not a user-facing condition: the
//! interpreter logs and skips the offending event rather than aborting
//! the batch.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Cell or line access beyond the current grid extent.
    #[error("out of bounds access: row {row}, col {col} in {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Requested grid shape cannot be represented.
    #[error("invalid dimension: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A cell write would run past the end of the buffer.
    #[error("malformed cell payload: write of {len} cells at index {start} exceeds buffer of {buffer}")]
    MalformedCells {
        start: usize,
        len: usize,
        buffer: usize,
    },

    /// Horizontal scroll is accepted by the protocol but not applied.
    #[error("unsupported horizontal scroll of {cols} columns")]
    UnsupportedScroll { cols: i64 },
}
