//! Writer for the sheet text format

use crate::error::Result;
use rpnsheet_engine::engine::Grid;
use std::io::Write;

/// Write the dimensions line (when given) and then every cell, row-major.
pub fn write_sheet<W: Write>(out: &mut W, dimensions: Option<&str>, grid: &Grid) -> Result<()> {
    if let Some(dimensions) = dimensions {
        writeln!(out, "{}", dimensions)?;
    }
    for (_, text) in grid.iter() {
        writeln!(out, "{}", text.unwrap_or_default())?;
    }
    Ok(())
}

/// Write a sheet to a string
pub fn write_sheet_content(dimensions: Option<&str>, grid: &Grid) -> String {
    let mut lines = Vec::with_capacity(grid.len() + 1);
    lines.extend(dimensions.map(str::to_string));
    lines.extend(grid.iter().map(|(_, text)| text.unwrap_or_default().to_string()));
    lines.join("\n") + "\n"
}
