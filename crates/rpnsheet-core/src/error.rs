//! Error types for rpnsheet core.

use thiserror::Error;

use rpnsheet_engine::engine::{ErrorKind, EvalError, GridError};

/// Errors that can occur while loading, evaluating or saving a sheet
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please provide valid dimensions")]
    NoDimensions,

    /// Carries how many dimensions were present (0 or 1).
    #[error("Please provide at least 2 dimensions")]
    MissingDimension(usize),

    #[error("Please provide valid numerical dimensions")]
    InvalidDimensions,

    #[error("Sheet of {rows} rows by {cols} columns is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("Refusing to read input: too large (more than {max} bytes)")]
    InputTooLarge { max: u64 },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SheetError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            SheetError::Io(_) => 1,
            SheetError::NoDimensions => 2,
            SheetError::MissingDimension(found) => {
                if *found == 0 {
                    1
                } else {
                    2
                }
            }
            SheetError::InvalidDimensions => 3,
            SheetError::GridTooLarge { .. } | SheetError::InputTooLarge { .. } => 1,
            SheetError::Grid(_) => 1,
            SheetError::Eval(err) if err.kind() == ErrorKind::CycleDetected => 5,
            SheetError::Eval(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
