//! Folding flat sequences into grids along the curve, and back.
//!
//! Element `i` of a sequence is placed at the `i`-th cell of the curve over a
//! `rows × cols` grid, with `x` selecting the row and `y` the column. Values
//! that are close in the sequence therefore end up close in the grid.

use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::{
    curve::Gilbert,
    error::{Error, Result},
};

/// A precomputed curve permutation for one grid shape.
///
/// Building a layout walks the curve once; conversions afterwards are plain
/// gathers, so a layout is worth keeping when many sequences of the same
/// shape are converted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Number of grid rows (the curve's `x` extent).
    rows: usize,
    /// Number of grid columns (the curve's `y` extent).
    cols: usize,
    /// Row-major offset of the cell at each curve position.
    order: Vec<usize>,
}

impl Layout {
    /// Build the layout for a `rows × cols` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let curve = Gilbert::new(dimension(rows)?, dimension(cols)?)?;
        let order = curve
            .iter()
            .map(|p| p.x as usize * cols + p.y as usize)
            .collect();
        log::debug!("built {rows}x{cols} layout");
        Ok(Self { rows, cols, order })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the layout has no cells. Never true for a constructed layout.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Row-major cell offsets in curve order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Place `values` on the grid in curve order.
    ///
    /// `values` must hold exactly `rows × cols` elements.
    pub fn to_grid<T: Clone>(&self, values: &[T]) -> Result<Array2<T>> {
        if values.len() != self.len() {
            return Err(Error::LengthMismatch {
                len: values.len(),
                expected: self.len(),
            });
        }
        let mut rank = vec![0; self.len()];
        for (i, &cell) in self.order.iter().enumerate() {
            rank[cell] = i;
        }
        let cells = rank.iter().map(|&i| values[i].clone()).collect();
        Ok(Array2::from_shape_vec((self.rows, self.cols), cells)?)
    }

    /// Read a grid back into a sequence in curve order.
    pub fn to_sequence<S, T>(&self, grid: &ArrayBase<S, Ix2>) -> Result<Vec<T>>
    where
        S: Data<Elem = T>,
        T: Clone,
    {
        let found = grid.dim();
        if found != (self.rows, self.cols) {
            return Err(Error::ShapeMismatch {
                expected: (self.rows, self.cols),
                found,
            });
        }
        Ok(self
            .order
            .iter()
            .map(|&cell| grid[[cell / self.cols, cell % self.cols]].clone())
            .collect())
    }
}

/// Fold `values` into a grid with `rows` rows along the curve.
///
/// The grid has `values.len() / rows` columns. Fails with
/// [`Error::InvalidDimension`] when the length is not a multiple of `rows`.
pub fn to_grid<T: Clone>(values: &[T], rows: usize) -> Result<Array2<T>> {
    if rows == 0 {
        return Err(Error::InvalidArgument("row count must be positive".into()));
    }
    if values.len() % rows != 0 {
        return Err(Error::InvalidDimension {
            len: values.len(),
            rows,
        });
    }
    let cols = values.len() / rows;
    if cols == 0 {
        return Ok(Array2::from_shape_vec((rows, 0), Vec::new())?);
    }
    Layout::new(rows, cols)?.to_grid(values)
}

/// Unfold a grid into a flat sequence along the curve. Inverse of
/// [`to_grid`].
pub fn to_sequence<S, T>(grid: &ArrayBase<S, Ix2>) -> Result<Vec<T>>
where
    S: Data<Elem = T>,
    T: Clone,
{
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return Ok(Vec::new());
    }
    Layout::new(rows, cols)?.to_sequence(grid)
}

/// Convert a grid extent to a curve dimension.
fn dimension(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::InvalidArgument(format!("grid extent {n} is too large")))
}
