//! Index builder for a directory of per-plant files.
//!
//! # Error Handling Strategy
//!
//! Index building is all-or-nothing:
//!
//! - **Unreadable or malformed files**: the first plant file that cannot be read, parsed or
//!   interpreted as an object aborts the whole build. The error names the file.
//! - **No partial output**: the index is built fully in memory before anything is written, and
//!   the output file is replaced atomically, so a failed run leaves any previous index intact.
//! - **Id/file name mismatch**: logged as a warning only; the entry keeps the record's own id.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::indexer::discovery::discover_plant_files;
use crate::models::IndexEntry;
use crate::parsers::parse_plant_file;
use crate::utils::write_pretty_json_atomic;

/// Build the plant index for every `.json` file in `input_dir`.
///
/// Entries follow file name order. Nothing is written to disk.
///
/// # Errors
///
/// Returns an error if the directory is missing or unreadable, or if any plant
/// file is malformed.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use plantdex::build_index;
///
/// let index = build_index(Path::new("plants"))?;
/// println!("Indexed {} plants", index.len());
/// # Ok::<(), plantdex::Error>(())
/// ```
pub fn build_index(input_dir: &Path) -> Result<Vec<IndexEntry>> {
    let files = discover_plant_files(input_dir)?;
    index_files(&files)
}

/// Build the plant index for `input_dir` and write it to `output_path`.
///
/// Returns the number of entries written. An existing file at `output_path` is
/// replaced. If `output_path` itself lies inside `input_dir` it is not indexed.
pub fn create_index(input_dir: &Path, output_path: &Path) -> Result<usize> {
    let mut files = discover_plant_files(input_dir)?;

    if let Ok(output) = output_path.canonicalize() {
        files.retain(|file| {
            let is_output = file.canonicalize().map(|f| f == output).unwrap_or(false);
            if is_output {
                debug!("Not indexing the index file itself: '{}'", file.display());
            }
            !is_output
        });
    }

    let index = index_files(&files)?;
    write_pretty_json_atomic(output_path, &index)?;
    info!("Wrote plant index '{}' ({} entries)", output_path.display(), index.len());

    Ok(index.len())
}

fn index_files(files: &[PathBuf]) -> Result<Vec<IndexEntry>> {
    let mut index = Vec::with_capacity(files.len());

    for path in files {
        let record = parse_plant_file(path)?;
        let entry = IndexEntry::from(&record);
        warn_on_id_mismatch(&entry, path);
        debug!("Indexed '{}'", path.display());
        index.push(entry);
    }

    Ok(index)
}

fn warn_on_id_mismatch(entry: &IndexEntry, path: &Path) {
    let stem = path.file_stem().map(|s| s.to_string_lossy());
    let id = entry.id_text();
    if id.as_deref() != stem.as_deref() {
        warn!(
            "Plant id {} does not match its file name '{}'",
            entry.id,
            path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        );
    }
}
