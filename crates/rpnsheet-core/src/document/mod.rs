//! Sheet state and logic (UI-agnostic).

mod io;
mod state;

pub use io::DEFAULT_MAX_INPUT_BYTES;
pub use state::Sheet;
