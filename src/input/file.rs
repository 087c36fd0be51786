//! File input with strict UTF-8 validation

use super::InputError;
use crate::utils::encoding::{as_utf8, guess_encoding};
use std::fs;
use std::path::Path;

/// Read `path` as UTF-8 text.
///
/// Missing paths and anything that is not a regular file are reported as
/// not found. Malformed UTF-8 is rejected rather than repaired.
pub fn read_file(path: &Path) -> Result<String, InputError> {
    let name = path.display().to_string();
    if !path.is_file() {
        return Err(InputError::NotFound(name));
    }

    let bytes = fs::read(path).map_err(|source| InputError::Io { path: name.clone(), source })?;

    match as_utf8(&bytes) {
        Ok(text) => {
            tracing::debug!("Read {} bytes from {}", bytes.len(), name);
            Ok(text.to_string())
        }
        Err(offset) => {
            tracing::debug!(
                "{} has invalid UTF-8 at byte {} (looks like {})",
                name,
                offset,
                guess_encoding(&bytes)
            );
            Err(InputError::NotUtf8(name))
        }
    }
}
