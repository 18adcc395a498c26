//! Parser for the sheet text format

use crate::error::{Result, SheetError};
use log::debug;
use rpnsheet_engine::engine::{Grid, validate_dimensions};

/// Upper bound on `rows * cols`, checked before the grid is allocated.
pub const MAX_CELLS: usize = 50_000_000;

/// A sheet as read from text, before evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSheet {
    /// The dimensions line, trimmed.
    pub dimensions: String,
    pub grid: Grid,
}

/// Parse sheet content from a string
pub fn parse_sheet_content(content: &str) -> Result<ParsedSheet> {
    let mut lines = content.lines();

    let Some(first) = lines.next() else {
        return Err(SheetError::NoDimensions);
    };
    let dimensions = first.trim();
    let (cols, rows) = parse_dimensions(dimensions)?;
    validate_dimensions(rows, cols)?;

    let cell_count = rows
        .checked_mul(cols)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or(SheetError::GridTooLarge { rows, cols })?;
    debug!("reading {cell_count} cells ({rows} rows, {cols} columns)");

    // Cells past the end of input are absent, not empty.
    let cells = lines.take(cell_count).map(|line| Some(line.to_string()));
    let grid = Grid::from_cells(rows, cols, cells)?;

    Ok(ParsedSheet {
        dimensions: dimensions.to_string(),
        grid,
    })
}

/// Returns `(cols, rows)`, unvalidated. Counts beyond `i32` are not numbers.
fn parse_dimensions(line: &str) -> Result<(usize, usize)> {
    let mut tokens = line.split_whitespace();

    let cols = tokens.next().ok_or(SheetError::MissingDimension(0))?;
    let cols = parse_dimension(cols)?;
    let rows = tokens.next().ok_or(SheetError::MissingDimension(1))?;
    let rows = parse_dimension(rows)?;

    // Negative counts fail the range checks as zero.
    let clamp = |n: i32| usize::try_from(n).unwrap_or(0);
    Ok((clamp(cols), clamp(rows)))
}

fn parse_dimension(token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| SheetError::InvalidDimensions)
}
