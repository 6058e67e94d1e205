//! Generalized Hilbert ("gilbert") curves over arbitrary rectangular grids.
//!
//! The classic Hilbert curve only covers square grids with a power-of-two
//! side. The generalized curve in this crate covers any `width × height` grid,
//! visiting every cell exactly once while keeping consecutive cells spatially
//! close. On top of the traversal the crate offers random access (offset to
//! point and back) and helpers that fold a flat sequence into a 2D grid along
//! the curve, and unfold it again.
//!
//! ```
//! let cells: Vec<(u32, u32)> = gilbert::gilbert2d(2, 2)?.map(Into::into).collect();
//! assert_eq!(cells, [(0, 0), (0, 1), (1, 1), (1, 0)]);
//! # Ok::<(), gilbert::error::Error>(())
//! ```

/// Curve construction, traversal and random access.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Converting between flat sequences and grids along the curve.
pub mod layout;
/// Grid coordinates.
pub mod point;

pub use crate::{
    curve::{Gilbert, Iter},
    layout::{Layout, to_grid, to_sequence},
    point::Point,
};

/// Traverse a `width × height` grid in generalized Hilbert order.
///
/// Returns an error if either dimension is zero.
pub fn gilbert2d(width: u32, height: u32) -> error::Result<Iter> {
    Ok(Gilbert::new(width, height)?.iter())
}
