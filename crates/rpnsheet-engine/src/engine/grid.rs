//! Grid storage.
//!
//! The grid is a dense row-major arena of optional cell texts. Before
//! evaluation a cell holds its postfix expression (or nothing); once the
//! evaluator resolves a cell it overwrites the text with the formatted
//! value, so the grid doubles as the memo cache for dependent cells.

use super::cell_ref::{CellRef, MAX_ROWS};
use super::error::GridError;

/// Check dimensions without allocating: rows first, then columns.
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || rows > MAX_ROWS {
        return Err(GridError::RowCount(rows));
    }
    if cols == 0 {
        return Err(GridError::ColumnCount(cols));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<String>>,
}

impl Grid {
    /// Create a grid with every cell absent.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        validate_dimensions(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Create a grid from row-major cell texts.
    /// Missing trailing cells stay absent; surplus cells are dropped.
    pub fn from_cells<I>(rows: usize, cols: usize, cells: I) -> Result<Grid, GridError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut grid = Grid::new(rows, cols)?;
        for (slot, text) in grid.cells.iter_mut().zip(cells) {
            *slot = text;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Text of a cell, `None` when the cell is absent or outside the grid.
    pub fn get(&self, cell: &CellRef) -> Option<&str> {
        if !self.contains(cell) {
            return None;
        }
        self.cells[cell.index(self.cols)].as_deref()
    }

    /// Overwrite a cell's text. Returns false if the cell is outside the grid.
    pub fn set(&mut self, cell: &CellRef, text: impl Into<String>) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.cells[cell.index(self.cols)] = Some(text.into());
        true
    }

    pub fn clear(&mut self, cell: &CellRef) {
        if self.contains(cell) {
            self.cells[cell.index(self.cols)] = None;
        }
    }

    /// Coordinates in row-major order.
    pub fn cell_refs(&self) -> impl Iterator<Item = CellRef> + use<> {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| CellRef::from_index(i, cols))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, Option<&str>)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, text)| (CellRef::from_index(i, cols), text.as_deref()))
    }
}
