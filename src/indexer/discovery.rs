use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

const PLANT_FILE_SUFFIX: &str = ".json";

/// Find the per-plant files directly inside `dir`.
///
/// Returns every regular file (or symlink to one) whose name ends with
/// `.json`, sorted by file name. Subdirectories are not searched.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` does not exist ([`Error::NotFound`])
/// - `dir` exists but is not a directory ([`Error::NotADirectory`])
/// - the directory or one of its entries cannot be read
pub fn discover_plant_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(dir.to_path_buf()));
        }
        Err(e) => return Err(Error::io(dir, e)),
    };
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker =
        WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;

        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(PLANT_FILE_SUFFIX) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> Error {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
    let source =
        err.into_io_error().unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    Error::io(path, source)
}
