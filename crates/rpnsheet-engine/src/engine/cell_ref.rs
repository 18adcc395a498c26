//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between cell labels (one uppercase row
//! letter followed by a 1-based column number, e.g. "A1", "C12") and
//! zero-indexed row/column coordinates.
//!
//! # Examples
//!
//! ```
//! use rpnsheet_engine::engine::CellRef;
//!
//! let cell = CellRef::decode("B3", 26, 10).unwrap();
//! assert_eq!(cell.row, 1); // 0-indexed
//! assert_eq!(cell.col, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use std::fmt;

/// Number of addressable rows (`A` through `Z`).
pub const MAX_ROWS: usize = 26;

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Decode a label against a grid of `rows` x `cols`.
    ///
    /// Returns `None` when the label is not a label at all or when it
    /// addresses a cell outside the grid. The evaluator relies on this to
    /// tell references apart from garbage.
    pub fn decode(label: &str, rows: usize, cols: usize) -> Option<CellRef> {
        let cell = Self::parse_label(label)?;
        if cell.row >= rows || cell.col >= cols {
            return None;
        }
        Some(cell)
    }

    fn parse_label(label: &str) -> Option<CellRef> {
        let mut chars = label.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() {
            return None;
        }

        let row = (letter as u8 - b'A') as usize;
        let col = digits.parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(row, col))
    }

    /// Convert a row index to its label letter (0 -> A, 25 -> Z).
    /// Rows beyond `Z` are not addressable and render as `?`.
    pub fn row_to_letter(row: usize) -> char {
        u32::try_from(row)
            .ok()
            .filter(|&r| (r as usize) < MAX_ROWS)
            .and_then(|r| char::from_u32('A' as u32 + r))
            .unwrap_or('?')
    }

    /// Position of this cell in a row-major buffer of `cols` columns.
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`CellRef::index`].
    pub fn from_index(index: usize, cols: usize) -> CellRef {
        CellRef::new(index / cols, index % cols)
    }
}

/// Build the label for a row/column pair (row 0, column 3 -> "A4").
pub fn encode(row: usize, col: usize) -> String {
    CellRef::new(row, col).to_string()
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::row_to_letter(self.row), self.col + 1)
    }
}
