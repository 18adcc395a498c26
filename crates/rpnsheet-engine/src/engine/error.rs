//! Error types for grid construction and evaluation.
//!
//! Every evaluation failure aborts the whole run. The messages are the
//! user-visible contract: they name the failing cell's label and, where one
//! exists, the cell's original expression text.

use thiserror::Error;

use super::cell_ref::CellRef;

/// Errors raised while evaluating a grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Illegal Argument {expression} at cell {cell}")]
    EmptyExpression { cell: CellRef, expression: String },

    #[error("The expression {expression} at cell {cell} is not valid")]
    InvalidExpression { cell: CellRef, expression: String },

    #[error(
        "Operator {operator} occured before there were enough numerical values for it to evaluate in the expression {expression} at cell {cell}"
    )]
    RpnUnderflow {
        cell: CellRef,
        expression: String,
        operator: String,
    },

    #[error("Extra Operands in the expression {expression} at cell {cell}")]
    RpnOverflow { cell: CellRef, expression: String },

    #[error("The RPN equation {expression} at cell {cell} attempted to divide by zero")]
    DivideByZero { cell: CellRef, expression: String },

    #[error("Cycle detected at cell {cell}")]
    CycleDetected { cell: CellRef },

    #[error("Cell {cell} is outside the grid")]
    OutsideGrid { cell: CellRef },
}

/// Fieldless mirror of [`EvalError`] for matching on the failure class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    EmptyExpression,
    InvalidExpression,
    RpnUnderflow,
    RpnOverflow,
    DivideByZero,
    CycleDetected,
    OutsideGrid,
}

impl EvalError {
    /// The cell the message names. For cycles this is the cell found on the
    /// active resolution path, not the cell whose token referenced it.
    pub fn cell(&self) -> CellRef {
        match self {
            EvalError::EmptyExpression { cell, .. }
            | EvalError::InvalidExpression { cell, .. }
            | EvalError::RpnUnderflow { cell, .. }
            | EvalError::RpnOverflow { cell, .. }
            | EvalError::DivideByZero { cell, .. }
            | EvalError::CycleDetected { cell }
            | EvalError::OutsideGrid { cell } => *cell,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::EmptyExpression { .. } => ErrorKind::EmptyExpression,
            EvalError::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            EvalError::RpnUnderflow { .. } => ErrorKind::RpnUnderflow,
            EvalError::RpnOverflow { .. } => ErrorKind::RpnOverflow,
            EvalError::DivideByZero { .. } => ErrorKind::DivideByZero,
            EvalError::CycleDetected { .. } => ErrorKind::CycleDetected,
            EvalError::OutsideGrid { .. } => ErrorKind::OutsideGrid,
        }
    }
}

/// Errors raised when a grid's dimensions are out of range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Please enter a valid row count : 1 - 26")]
    RowCount(usize),

    #[error("Please enter a positive non-zero value for column count")]
    ColumnCount(usize),
}
