//! File collaborators: read the raw image in, write the rendered result out.

use std::path::Path;

use crate::error::IoError;

/// Read an entire image file into memory.
///
/// The decoder works on a fully materialized buffer, so the whole file is
/// read up front.
pub fn read_image_file(path: &Path) -> Result<Vec<u8>, IoError> {
    std::fs::read(path).map_err(|e| IoError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Write rendered output to `path`, replacing any existing file.
pub fn write_output_file(path: &Path, contents: &[u8]) -> Result<(), IoError> {
    std::fs::write(path, contents).map_err(|e| IoError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
