use super::Sheet;
use crate::error::{Result, SheetError};
use crate::storage::write_sheet;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Input size accepted when no explicit limit is configured.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024; // 64 MiB

/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
fn read_limited<R: Read>(reader: R, max_bytes: u64) -> Result<String> {
    let mut bytes = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_bytes {
        return Err(SheetError::InputTooLarge { max: max_bytes });
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl Sheet {
    /// Read a sheet from any reader (typically stdin), refusing input over
    /// `max_bytes`.
    pub fn read_from<R: Read>(reader: R, max_bytes: u64) -> Result<Self> {
        let content = read_limited(reader, max_bytes)?;
        Self::parse(&content)
    }

    /// Load a sheet file, refusing files over `max_bytes`.
    pub fn load(path: &Path, max_bytes: u64) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > max_bytes {
            return Err(SheetError::InputTooLarge { max: max_bytes });
        }
        debug!("loading {}", path.display());
        Self::read_from(File::open(path)?, max_bytes)
    }

    /// Write the sheet in its text form.
    pub fn write_to<W: Write>(&self, out: &mut W, echo_dimensions: bool) -> Result<()> {
        let dimensions = echo_dimensions.then_some(self.dimensions.as_str());
        write_sheet(out, dimensions, &self.grid)?;
        out.flush()?;
        Ok(())
    }

    /// Save the sheet to a file.
    pub fn save(&self, path: &Path, echo_dimensions: bool) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out, echo_dimensions)
    }

    pub fn to_output_string(&self, echo_dimensions: bool) -> String {
        let dimensions = echo_dimensions.then_some(self.dimensions.as_str());
        crate::storage::write_sheet_content(dimensions, &self.grid)
    }
}
