use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Create `dir` and any missing parents.
///
/// Returns `true` when the directory had to be created and `false` when it
/// already existed.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    Ok(true)
}

/// Whether `path` contains a `..` component
pub fn has_parent_components(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

/// Directory part of a relative or absolute file path, `None` for a bare file name.
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Temporary sibling used for atomic replacement of `path`
pub fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
