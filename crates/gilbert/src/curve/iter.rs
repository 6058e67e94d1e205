//! Lazy traversal driven by an explicit work stack.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::block::{Block, Run, Split, locate};
use crate::point::Point;

/// Pending work: a block still to be subdivided, or a partially walked line.
#[derive(Clone, Copy, Debug)]
enum Frame {
    /// A block that has not been split yet.
    Block(Block),
    /// A line with at least one cell left.
    Run(Run),
}

/// Iterator over the cells of a grid in generalized Hilbert order.
///
/// Created by [`Gilbert::iter`](super::Gilbert::iter),
/// [`Gilbert::iter_from`](super::Gilbert::iter_from) or
/// [`gilbert2d`](crate::gilbert2d). Each call to `next` splits blocks only
/// until the next cell is known, so dropping the iterator early costs
/// nothing. The stack holds at most two pending siblings per level of
/// subdivision.
#[derive(Clone, Debug)]
pub struct Iter {
    /// Pending frames; the top of the stack is visited next.
    stack: SmallVec<[Frame; 24]>,
    /// Cells left to yield.
    remaining: u64,
}

impl Iter {
    /// Traverse `root` from its first cell.
    pub(super) fn new(root: Block) -> Self {
        let mut stack = SmallVec::new();
        stack.push(Frame::Block(root));
        Self {
            stack,
            remaining: root.area(),
        }
    }

    /// Traverse `root` starting at curve offset `start`.
    ///
    /// Descends straight to the block holding `start`, leaving the later
    /// siblings of every block on the way down on the stack.
    pub(super) fn starting_at(root: Block, start: u64) -> Self {
        let length = root.area();
        let mut stack = SmallVec::new();
        if start >= length {
            return Self {
                stack,
                remaining: 0,
            };
        }

        let mut block = root;
        let mut offset = start;
        loop {
            match block.split() {
                Split::Run(run) => {
                    stack.push(Frame::Run(run.skip(offset)));
                    break;
                }
                split => {
                    let children = split.children();
                    let Some((pos, inner)) = locate(children, offset) else {
                        break;
                    };
                    stack.extend(children[pos + 1..].iter().rev().map(|b| Frame::Block(*b)));
                    block = children[pos];
                    offset = inner;
                }
            }
        }

        log::trace!(
            "seeked to offset {start} with {} pending frames",
            stack.len()
        );
        Self {
            stack,
            remaining: length - start,
        }
    }
}

impl Iterator for Iter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            match self.stack.pop()? {
                Frame::Run(run) => {
                    if run.len > 1 {
                        self.stack.push(Frame::Run(run.skip(1)));
                    }
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(run.at(0));
                }
                Frame::Block(block) => match block.split() {
                    Split::Run(run) => self.stack.push(Frame::Run(run)),
                    split => self
                        .stack
                        .extend(split.children().iter().rev().map(|b| Frame::Block(*b))),
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Iter {}
