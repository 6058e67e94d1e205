use thiserror::Error;

use crate::point::Point;

/// Errors produced by curve construction, lookup and grid conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// A dimension or size argument is outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A sequence cannot be folded into the requested number of rows.
    #[error("invalid dimension: {len} values cannot be arranged into {rows} rows")]
    InvalidDimension {
        /// Length of the sequence.
        len: usize,
        /// Requested first dimension.
        rows: usize,
    },
    /// A sequence does not hold exactly as many values as a layout has cells.
    #[error("length mismatch: layout has {expected} cells, got {len} values")]
    LengthMismatch {
        /// Length of the sequence.
        len: usize,
        /// Number of cells in the layout.
        expected: usize,
    },
    /// A grid does not have the shape a layout was built for.
    #[error("shape mismatch: expected {expected:?} grid, found {found:?}")]
    ShapeMismatch {
        /// `(rows, cols)` of the layout.
        expected: (usize, usize),
        /// `(rows, cols)` of the supplied grid.
        found: (usize, usize),
    },
    /// A curve offset past the end of the curve.
    #[error("index {index} out of range for curve of length {length}")]
    IndexOutOfRange {
        /// Requested offset.
        index: u64,
        /// Number of cells on the curve.
        length: u64,
    },
    /// A point that does not lie on the grid.
    #[error("point ({}, {}) lies outside the {width}x{height} grid", .point.x, .point.y)]
    PointOutOfRange {
        /// Requested point.
        point: Point,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Grid construction failed inside `ndarray`.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;
