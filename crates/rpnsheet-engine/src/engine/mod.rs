//! Spreadsheet engine API.
//!
//! This module provides the evaluation engine for postfix cell grids:
//!
//! - [`Grid`] - Dense row-major storage for cell texts
//! - [`CellRef`], [`encode`] - Cell label parsing (A1 notation ↔ row/col indices)
//! - [`VisitMap`], [`VisitState`] - Tri-state visitation marking
//! - [`Token`], [`OperandStack`] - Postfix tokens and the numeric stack machine
//! - [`resolve`], [`evaluate_grid`] - Dependency-aware evaluation
//! - [`format_value`] - Fixed five-decimal formatting of results

mod cell_ref;
mod error;
mod eval;
mod format;
mod grid;
mod rpn;
mod visit;

pub use cell_ref::{CellRef, MAX_ROWS, encode};
pub use error::{ErrorKind, EvalError, GridError};
pub use eval::{ResolveStats, evaluate_grid, resolve};
pub use format::{DECIMALS, format_value, parse_value};
pub use grid::{Grid, validate_dimensions};
pub use rpn::{BinaryOp, OperandStack, StackFault, Token, UnaryOp};
pub use visit::{VisitMap, VisitState};
