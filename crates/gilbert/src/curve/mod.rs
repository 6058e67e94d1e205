//! The generalized Hilbert curve over a `width × height` grid.
//!
//! The grid is covered by recursively subdividing it: blocks that are much
//! longer than they are wide are cut in two along their long side, all
//! others are cut into the three-part "U" of the classic Hilbert curve, with
//! the first and last parts rotated. Odd half-sizes are nudged to even ones
//! where possible, which keeps the curve continuous whenever both sides are
//! even and limits every other grid to at most one diagonal step.

/// Block subdivision.
mod block;
/// Lazy traversal.
mod iter;

use self::block::{Block, Split, locate};
pub use self::iter::Iter;
use crate::{
    error::{Error, Result},
    point::Point,
};

/// A generalized Hilbert curve covering a `width × height` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gilbert {
    /// Extent along `x`.
    width: u32,
    /// Extent along `y`.
    height: u32,
}

impl Gilbert {
    /// Construct the curve for a grid. Both dimensions must be at least one.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        log::debug!("gilbert curve over {width}x{height} grid");
        Ok(Self { width, height })
    }

    /// Grid width.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells on the curve.
    pub const fn length(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Iterate over every cell in curve order.
    pub fn iter(&self) -> Iter {
        Iter::new(self.root())
    }

    /// Iterate over the cells from curve offset `start` onwards.
    ///
    /// Equivalent to `self.iter().skip(start)` without walking the skipped
    /// prefix. `start == length` gives an empty iterator.
    pub fn iter_from(&self, start: u64) -> Result<Iter> {
        if start > self.length() {
            return Err(self.out_of_range(start));
        }
        Ok(Iter::starting_at(self.root(), start))
    }

    /// The cell at curve offset `index`.
    pub fn point(&self, index: u64) -> Result<Point> {
        if index >= self.length() {
            return Err(self.out_of_range(index));
        }
        let mut block = self.root();
        let mut offset = index;
        loop {
            match block.split() {
                Split::Run(run) => return Ok(run.at(offset)),
                split => {
                    let children = split.children();
                    let (pos, inner) =
                        locate(children, offset).ok_or_else(|| self.out_of_range(index))?;
                    block = children[pos];
                    offset = inner;
                }
            }
        }
    }

    /// The curve offset of cell `p`. Inverse of [`point`](Self::point).
    pub fn index(&self, p: Point) -> Result<u64> {
        let outside = || Error::PointOutOfRange {
            point: p,
            width: self.width,
            height: self.height,
        };
        if p.x >= self.width || p.y >= self.height {
            return Err(outside());
        }
        let mut block = self.root();
        let mut base = 0;
        loop {
            match block.split() {
                Split::Run(run) => return Ok(base + run.offset_of(p)),
                split => {
                    let children = split.children();
                    let pos = children
                        .iter()
                        .position(|child| child.contains(p))
                        .ok_or_else(outside)?;
                    base += children[..pos].iter().map(Block::area).sum::<u64>();
                    block = children[pos];
                }
            }
        }
    }

    /// The block spanning the whole grid.
    const fn root(&self) -> Block {
        Block::root(self.width, self.height)
    }

    /// Error for an offset past the end of the curve.
    const fn out_of_range(&self, index: u64) -> Error {
        Error::IndexOutOfRange {
            index,
            length: self.length(),
        }
    }
}

impl IntoIterator for &Gilbert {
    type Item = Point;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}
