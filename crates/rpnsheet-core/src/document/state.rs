use crate::error::Result;
use crate::storage::{ParsedSheet, parse_sheet_content};
use rpnsheet_engine::engine::{Grid, ResolveStats, evaluate_grid};

/// A grid of postfix expressions together with its dimensions line.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Dimensions line echoed on output
    pub(crate) dimensions: String,
    /// Cell texts; formatted values once evaluated
    pub(crate) grid: Grid,
    /// Whether every cell holds its resolved value
    pub(crate) evaluated: bool,
}

impl Sheet {
    /// Wrap an existing grid. The dimensions line is `"<cols> <rows>"`.
    pub fn new(grid: Grid) -> Self {
        Sheet {
            dimensions: format!("{} {}", grid.cols(), grid.rows()),
            grid,
            evaluated: false,
        }
    }

    /// Parse a sheet from its text form.
    pub fn parse(content: &str) -> Result<Self> {
        let ParsedSheet { dimensions, grid } = parse_sheet_content(content)?;
        Ok(Sheet {
            dimensions,
            grid,
            evaluated: false,
        })
    }

    /// Evaluate every cell in place.
    ///
    /// Each run starts from scratch, so evaluating twice is a no-op on the
    /// values: resolved cells hold plain numbers.
    pub fn evaluate(&mut self) -> Result<ResolveStats> {
        let stats = evaluate_grid(&mut self.grid)?;
        self.evaluated = true;
        Ok(stats)
    }

    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access; marks the sheet as needing evaluation.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.evaluated = false;
        &mut self.grid
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }
}
