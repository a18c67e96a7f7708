//! `.max` file reading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::editor::MaxFile;
use crate::error::{Error, Result};

/// Read a whole file into memory.
///
/// # Errors
///
/// Returns [`Error::FileOpen`] if the file cannot be opened, or
/// [`Error::Io`] if reading it fails.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    tracing::debug!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Read a `.max` container from disk.
pub fn read_max<P: AsRef<Path>>(path: P) -> Result<MaxFile> {
    read_bytes(path).map(MaxFile::from_bytes)
}
