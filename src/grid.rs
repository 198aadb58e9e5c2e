use std::fmt;

use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside of a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Expected a grid of (rows, cols) {expected:?}, but got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("A {rows}x{cols} grid has more cells than fit in memory")]
    TooLarge { rows: usize, cols: usize },
}

/// A fixed-size field of cells, where `true` is alive.
///
/// Cells are stored row-major in a single buffer, so every row has the same length. The shape is
/// set at construction and never changes afterwards. To change the shape, build a new grid and
/// copy the old one into it with [`crate::resize::transcribe`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead
    ///
    /// # Panics
    ///
    /// If `rows * cols` overflows a `usize`. Use [`Grid::try_new`] for untrusted dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a grid with every cell dead, or fail if `rows * cols` cells can't be addressed.
    pub fn try_new(rows: usize, cols: usize) -> GridResult<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Build a grid from a row-major list of cells.
    ///
    /// A buffer of the wrong length is reported as a single row of `cells.len()` cells.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> GridResult<Self> {
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::DimensionMismatch {
                expected: (rows, cols),
                got: (1, cells.len()),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    /// Build a dead grid, then bring the listed `(row, col)` cells to life.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> GridResult<Self> {
        let mut grid = Self::new(rows, cols);

        for &(row, col) in alive {
            grid.set(row, col, true)?;
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<bool> {
        let i = self.index(row, col)?;

        Ok(self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> GridResult<()> {
        let i = self.index(row, col)?;
        self.cells[i] = value;

        Ok(())
    }

    /// Flip a single cell. Returns the new state of the cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> GridResult<bool> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];

        Ok(self.cells[i])
    }

    pub fn is_all_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Compare the cells of two grids of the same shape.
    pub fn matches(&self, other: &Grid) -> GridResult<bool> {
        if self.dimensions() != other.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: self.dimensions(),
                got: other.dimensions(),
            });
        }

        Ok(self.cells == other.cells)
    }

    /// Coordinates of every live cell, in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;

        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Read a cell the caller already knows is in bounds.
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Write a cell the caller already knows is in bounds.
    pub(crate) fn put(&mut self, row: usize, col: usize, value: bool) {
        self.cells[row * self.cols + col] = value;
    }

    fn index(&self, row: usize, col: usize) -> GridResult<usize> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(row * self.cols + col)
    }
}

/// One line per row, `#` for a live cell and `.` for a dead one.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }

            for col in 0..self.cols {
                let c = if self.cell(row, col) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}
