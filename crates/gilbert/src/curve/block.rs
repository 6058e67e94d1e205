//! The recursive subdivision step shared by traversal and random access.

use crate::point::Point;

/// An axis-aligned rectangle of cells, described by an origin and two
/// direction vectors.
///
/// The major vector `(ax, ay)` and the minor vector `(bx, by)` each have
/// exactly one non-zero component. The rectangle spans `|ax + ay|` cells along
/// the major axis and `|bx + by|` along the minor axis, starting at the origin
/// cell and extending in the direction of each vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Origin along the first dimension.
    pub x: i64,
    /// Origin along the second dimension.
    pub y: i64,
    /// Major vector, x component.
    pub ax: i64,
    /// Major vector, y component.
    pub ay: i64,
    /// Minor vector, x component.
    pub bx: i64,
    /// Minor vector, y component.
    pub by: i64,
}

/// A straight line of cells walked one unit step at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// First-dimension coordinate of the first cell.
    pub x: i64,
    /// Second-dimension coordinate of the first cell.
    pub y: i64,
    /// Unit step, x component.
    pub dx: i64,
    /// Unit step, y component.
    pub dy: i64,
    /// Number of cells left on the line.
    pub len: u64,
}

/// Outcome of subdividing a [`Block`].
#[derive(Clone, Copy, Debug)]
pub enum Split {
    /// The block is one cell thick and is filled by a straight line.
    Run(Run),
    /// Long case: two halves along the major axis.
    Halves([Block; 2]),
    /// Standard case: the Hilbert "U" of three sub-blocks.
    Thirds([Block; 3]),
}

impl Block {
    /// The block covering a `width × height` grid, oriented so the major
    /// axis is the longer side.
    pub const fn root(width: u32, height: u32) -> Self {
        let (w, h) = (width as i64, height as i64);
        if width >= height {
            Self::new(0, 0, w, 0, 0, h)
        } else {
            Self::new(0, 0, 0, h, w, 0)
        }
    }

    /// Construct a block from its origin and vectors.
    pub const fn new(x: i64, y: i64, ax: i64, ay: i64, bx: i64, by: i64) -> Self {
        Self {
            x,
            y,
            ax,
            ay,
            bx,
            by,
        }
    }

    /// Extent along the major axis.
    pub const fn major(&self) -> u64 {
        (self.ax + self.ay).unsigned_abs()
    }

    /// Extent along the minor axis.
    pub const fn minor(&self) -> u64 {
        (self.bx + self.by).unsigned_abs()
    }

    /// Number of cells in the block.
    pub const fn area(&self) -> u64 {
        self.major() * self.minor()
    }

    /// Whether the cell at `p` lies inside the block.
    pub fn contains(&self, p: Point) -> bool {
        let x_end = self.x + (self.ax - self.ax.signum()) + (self.bx - self.bx.signum());
        let y_end = self.y + (self.ay - self.ay.signum()) + (self.by - self.by.signum());
        let (px, py) = (i64::from(p.x), i64::from(p.y));
        (self.x.min(x_end)..=self.x.max(x_end)).contains(&px)
            && (self.y.min(y_end)..=self.y.max(y_end)).contains(&py)
    }

    /// Subdivide the block one level.
    ///
    /// Children are returned in traversal order. Their areas sum to the area
    /// of the block, and each child's first cell is adjacent to the previous
    /// child's last cell except at odd-sized seams.
    pub fn split(&self) -> Split {
        let Self {
            x,
            y,
            ax,
            ay,
            bx,
            by,
        } = *self;
        let (major, minor) = (self.major(), self.minor());
        let (dax, day) = (ax.signum(), ay.signum());
        let (dbx, dby) = (bx.signum(), by.signum());

        if minor == 1 {
            return Split::Run(Run {
                x,
                y,
                dx: dax,
                dy: day,
                len: major,
            });
        }
        if major == 1 {
            return Split::Run(Run {
                x,
                y,
                dx: dbx,
                dy: dby,
                len: minor,
            });
        }

        // Floor division keeps negative vectors consistent with their sign.
        let (mut ax2, mut ay2) = (ax.div_euclid(2), ay.div_euclid(2));
        let (mut bx2, mut by2) = (bx.div_euclid(2), by.div_euclid(2));
        let major2 = (ax2 + ay2).unsigned_abs();
        let minor2 = (bx2 + by2).unsigned_abs();

        if 2 * major > 3 * minor {
            // Prefer an even first half.
            if major2 % 2 == 1 && major > 2 {
                ax2 += dax;
                ay2 += day;
            }
            Split::Halves([
                Self::new(x, y, ax2, ay2, bx, by),
                Self::new(x + ax2, y + ay2, ax - ax2, ay - ay2, bx, by),
            ])
        } else {
            if minor2 % 2 == 1 && minor > 2 {
                bx2 += dbx;
                by2 += dby;
            }
            Split::Thirds([
                Self::new(x, y, bx2, by2, ax2, ay2),
                Self::new(x + bx2, y + by2, ax, ay, bx - bx2, by - by2),
                Self::new(
                    x + (ax - dax) + (bx2 - dbx),
                    y + (ay - day) + (by2 - dby),
                    -bx2,
                    -by2,
                    -(ax - ax2),
                    -(ay - ay2),
                ),
            ])
        }
    }
}

impl Run {
    /// The cell `offset` steps along the line.
    pub const fn at(&self, offset: u64) -> Point {
        let step = offset as i64;
        Point::new(
            (self.x + self.dx * step) as u32,
            (self.y + self.dy * step) as u32,
        )
    }

    /// The remainder of the line after skipping `n` cells.
    pub const fn skip(self, n: u64) -> Self {
        let step = n as i64;
        Self {
            x: self.x + self.dx * step,
            y: self.y + self.dy * step,
            len: self.len.saturating_sub(n),
            ..self
        }
    }

    /// Offset of a cell known to lie on the line.
    pub const fn offset_of(&self, p: Point) -> u64 {
        (p.x as i64 - self.x).unsigned_abs() + (p.y as i64 - self.y).unsigned_abs()
    }
}

impl Split {
    /// Sub-blocks in traversal order; empty for a straight run.
    pub fn children(&self) -> &[Block] {
        match self {
            Self::Run(_) => &[],
            Self::Halves(blocks) => blocks,
            Self::Thirds(blocks) => blocks,
        }
    }
}

/// Find the child holding curve offset `offset`, returning its position and
/// the offset relative to that child.
pub fn locate(children: &[Block], mut offset: u64) -> Option<(usize, u64)> {
    for (pos, child) in children.iter().enumerate() {
        let area = child.area();
        if offset < area {
            return Some((pos, offset));
        }
        offset -= area;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_sum(split: &Split) -> u64 {
        split.children().iter().map(Block::area).sum()
    }

    #[test]
    fn root_orientation() {
        assert_eq!(Block::root(5, 3), Block::new(0, 0, 5, 0, 0, 3));
        assert_eq!(Block::root(3, 5), Block::new(0, 0, 0, 5, 3, 0));
        assert_eq!(Block::root(4, 4), Block::new(0, 0, 4, 0, 0, 4));
    }

    #[test]
    fn thin_blocks_are_runs() {
        match Block::root(5, 1).split() {
            Split::Run(run) => assert_eq!((run.dx, run.dy, run.len), (1, 0, 5)),
            other => panic!("expected run, got {other:?}"),
        }
        match Block::root(1, 5).split() {
            Split::Run(run) => assert_eq!((run.dx, run.dy, run.len), (0, 1, 5)),
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn long_blocks_split_in_two() {
        // Half of 10 is odd, so the first half grows to 6.
        let split = Block::root(10, 2).split();
        match split {
            Split::Halves([a, b]) => {
                assert_eq!(a, Block::new(0, 0, 6, 0, 0, 2));
                assert_eq!(b, Block::new(6, 0, 4, 0, 0, 2));
            }
            other => panic!("expected halves, got {other:?}"),
        }
        assert_eq!(area_sum(&split), 20);
    }

    #[test]
    fn square_blocks_split_in_three() {
        let split = Block::root(4, 4).split();
        match split {
            Split::Thirds([a, b, c]) => {
                assert_eq!(a, Block::new(0, 0, 0, 2, 2, 0));
                assert_eq!(b, Block::new(0, 2, 4, 0, 0, 2));
                assert_eq!(c, Block::new(3, 1, 0, -2, -2, 0));
            }
            other => panic!("expected thirds, got {other:?}"),
        }
        assert_eq!(area_sum(&split), 16);
    }

    #[test]
    fn children_cover_parent() {
        for w in 1..20 {
            for h in 1..20 {
                let block = Block::root(w, h);
                let split = block.split();
                if !split.children().is_empty() {
                    assert_eq!(area_sum(&split), block.area(), "{w}x{h}");
                }
            }
        }
    }

    #[test]
    fn containment_with_negative_vectors() {
        let block = Block::new(3, 1, 0, -2, -2, 0);
        assert!(block.contains(Point::new(3, 1)));
        assert!(block.contains(Point::new(2, 0)));
        assert!(!block.contains(Point::new(1, 0)));
        assert!(!block.contains(Point::new(3, 2)));
    }

    #[test]
    fn locate_children() {
        let split = Block::root(4, 4).split();
        assert_eq!(locate(split.children(), 0), Some((0, 0)));
        assert_eq!(locate(split.children(), 4), Some((1, 0)));
        assert_eq!(locate(split.children(), 11), Some((1, 7)));
        assert_eq!(locate(split.children(), 12), Some((2, 0)));
        assert_eq!(locate(split.children(), 16), None);
    }

    #[test]
    fn runs() {
        let run = Run {
            x: 3,
            y: 0,
            dx: -1,
            dy: 0,
            len: 4,
        };
        assert_eq!(run.at(2), Point::new(1, 0));
        let rest = run.skip(1);
        assert_eq!(rest.at(0), Point::new(2, 0));
        assert_eq!(rest.len, 3);
        assert_eq!(run.offset_of(Point::new(0, 0)), 3);
    }
}
