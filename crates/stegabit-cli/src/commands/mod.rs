pub mod capacity;
pub mod hide;
pub mod unveil;
pub mod unveil_raw;

use std::fs;
use std::path::Path;

use stegabit_core::StegabitError;

use crate::CliResult;

/// Reads a raw, already flattened buffer from `path`.
pub(crate) fn read_buffer(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path).map_err(|source| StegabitError::ReadError { source })
}

pub(crate) fn write_buffer(path: &Path, buffer: &[u8]) -> CliResult<()> {
    fs::write(path, buffer).map_err(|source| StegabitError::WriteError { source })
}
