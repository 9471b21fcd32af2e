use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::report::{OverwrittenRecord, SkippedRecord, SplitReport};
use crate::error::{Error, Result};
use crate::models::{IdProblem, ImageRef, PlantId, PlantRecord};
use crate::parsers::parse_plant_collection;
use crate::utils::{ensure_dir, has_parent_components, parent_dir, write_pretty_json};

/// Options controlling how records are split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Abort on a missing, unusable or duplicate id instead of skipping or overwriting
    pub strict: bool,
    /// Base directory that relative `image` paths resolve against
    pub image_root: PathBuf,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self { strict: false, image_root: PathBuf::from(".") }
    }
}

/// Split a plant collection file into one `<id>.json` file per record.
///
/// Reads `input` (a single plant object or an array of them), creates
/// `output_dir` if needed and writes each record with a usable id to
/// `output_dir/<id>.json`, pretty-printed with two-space indentation.
///
/// # Errors
///
/// Returns an error if:
/// - `input` does not exist ([`Error::NotFound`])
/// - `input` is not valid JSON ([`Error::Parse`])
/// - the document is not an object or an array of objects
/// - any directory or file cannot be written
/// - in strict mode, a record has a missing, unusable or duplicate id
///
/// Files written before an error are left in place.
pub fn split_file(input: &Path, output_dir: &Path, options: &SplitOptions) -> Result<SplitReport> {
    let records = parse_plant_collection(input)?;
    debug!("Read {} plant records from '{}'", records.len(), input.display());
    split_records(&records, output_dir, options)
}

/// Write already-parsed records to `output_dir`, one file per record.
///
/// In the default mode a record without a usable id is logged and skipped, and
/// a repeated id replaces the earlier file (last write wins).
pub fn split_records(
    records: &[PlantRecord],
    output_dir: &Path,
    options: &SplitOptions,
) -> Result<SplitReport> {
    let mut report = SplitReport::default();
    let mut first_seen: HashMap<PlantId, usize> = HashMap::new();

    if ensure_dir(output_dir)? {
        debug!("Created output directory '{}'", output_dir.display());
    }

    for (position, record) in records.iter().enumerate() {
        let id = match record.plant_id() {
            Ok(id) => id,
            Err(problem) => {
                skip_record(position, problem, options, &mut report)?;
                continue;
            }
        };

        let output_path = output_dir.join(id.file_name());

        if let Some(&first) = first_seen.get(&id) {
            if options.strict {
                return Err(Error::DuplicateId { id: id.to_string(), first, position });
            }
            warn!(
                "Plant id '{}' at record {} overwrites record {} in '{}'",
                id,
                position,
                first,
                output_path.display()
            );
            report.overwritten.push(OverwrittenRecord { id: id.clone(), first, position });
        }

        if let Some(image) = record.image() {
            prepare_image_dir(image, position, options, &mut report)?;
        }

        write_pretty_json(&output_path, record)?;
        info!("Successfully created '{}'", output_path.display());

        if !first_seen.contains_key(&id) {
            report.written.push(output_path);
            first_seen.insert(id, position);
        }
    }

    Ok(report)
}

fn skip_record(
    position: usize,
    problem: IdProblem,
    options: &SplitOptions,
    report: &mut SplitReport,
) -> Result<()> {
    match (&problem, options.strict) {
        (IdProblem::Missing, true) => return Err(Error::MissingId { position }),
        (IdProblem::Unusable(reason), true) => {
            return Err(Error::UnusableId { position, reason: reason.clone() });
        }
        (IdProblem::Missing, false) => {
            warn!(
                "Found a plant without an 'id' field at record {}, skipping this entry",
                position
            );
        }
        (IdProblem::Unusable(reason), false) => {
            warn!(
                "Plant at record {} has an unusable 'id' ({}), skipping this entry",
                position, reason
            );
        }
    }
    report.skipped.push(SkippedRecord { position, reason: problem });
    Ok(())
}

/// Create the parent directory of a record's `image` path under the image root.
///
/// No image file is touched; the directory only has to exist for whoever places
/// the image later.
fn prepare_image_dir(
    image: ImageRef<'_>,
    position: usize,
    options: &SplitOptions,
    report: &mut SplitReport,
) -> Result<()> {
    let path = match image {
        ImageRef::Path(path) => path,
        ImageRef::NotAString(value) => {
            warn!("Ignoring non-string 'image' value {} at record {}", value, position);
            return Ok(());
        }
    };

    let Some(relative_dir) = parent_dir(path) else {
        return Ok(());
    };
    if has_parent_components(relative_dir) {
        warn!(
            "Not creating image directory '{}' for record {}: path leaves the image root",
            relative_dir.display(),
            position
        );
        return Ok(());
    }

    let image_dir = options.image_root.join(relative_dir);
    if ensure_dir(&image_dir)? {
        info!("Creating directory for image: '{}'", image_dir.display());
        report.image_dirs.push(image_dir);
    }
    Ok(())
}
