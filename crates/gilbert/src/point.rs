//! Grid coordinates produced by the curve.

/// A cell on a 2D grid. `x` runs along the first dimension, `y` along the
/// second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// First coordinate.
    pub x: u32,
    /// Second coordinate.
    pub y: u32,
}

impl Point {
    /// Create a new `Point`.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance between two points.
    pub const fn manhattan(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Whether the two points share an edge.
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (u32, u32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
