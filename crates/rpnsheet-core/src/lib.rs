//! rpnsheet-core - Sheet document model + text storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{DEFAULT_MAX_INPUT_BYTES, Sheet};
pub use error::{Result, SheetError};

pub use rpnsheet_engine::engine::{CellRef, Grid, ResolveStats};
