//! rpnsheet_engine - Dependency-aware postfix evaluation for cell grids.

pub mod engine;

pub use engine::{CellRef, EvalError, Grid, GridError, evaluate_grid};
