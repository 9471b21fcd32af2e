//! Pretty JSON output with optional atomic replacement

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::paths::temp_sibling;
use crate::error::{Error, Result};

/// Render `value` as JSON with two-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|source| Error::Serialize { what: what.to_string(), source })
}

/// Write `value` as pretty JSON to `path`, replacing any existing file.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value, &path.display().to_string())?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

/// Write `value` as pretty JSON through a temp file and rename.
///
/// Readers of `path` see either the old content or the complete new content.
pub fn write_pretty_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value, &path.display().to_string())?;
    let temp = temp_sibling(path);

    fs::write(&temp, json).map_err(|e| Error::io(&temp, e))?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(Error::io(path, e));
    }
    Ok(())
}
