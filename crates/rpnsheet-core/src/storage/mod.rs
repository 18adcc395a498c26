//! Sheet text format.
//!
//! The first line holds the dimensions `N M` (columns, then rows). Each
//! following line is one cell, row-major. Output repeats the dimensions line
//! followed by one formatted value per line.

mod parser;
mod writer;

pub use parser::{MAX_CELLS, ParsedSheet, parse_sheet_content};
pub use writer::{write_sheet, write_sheet_content};
