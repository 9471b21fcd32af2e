use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::PlantRecord;

/// Read a JSON document from disk, mapping a missing file to [`Error::NotFound`].
pub fn read_json(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::io(path, e),
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|source| Error::Parse { path: path.to_path_buf(), source })
}

/// Parse a plant collection: either one plant object or an array of them.
///
/// A single object is returned as a one-element list.
pub fn parse_plant_collection(path: &Path) -> Result<Vec<PlantRecord>> {
    let document = read_json(path)?;
    records_from_value(document, path)
}

/// Normalize a parsed document into plant records.
///
/// # Errors
///
/// Returns [`Error::InvalidRecord`] when the document, or any element of a
/// top-level array, is not a JSON object.
pub fn records_from_value(document: Value, source: &Path) -> Result<Vec<PlantRecord>> {
    match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(position, item)| match item {
                Value::Object(fields) => Ok(PlantRecord::new(fields)),
                other => Err(Error::InvalidRecord {
                    location: format!("element {} of '{}'", position, source.display()),
                    reason: format!("expected an object, found {}", json_type_name(&other)),
                }),
            })
            .collect(),
        Value::Object(fields) => Ok(vec![PlantRecord::new(fields)]),
        other => Err(Error::InvalidRecord {
            location: format!("'{}'", source.display()),
            reason: format!(
                "expected an object or an array of objects, found {}",
                json_type_name(&other)
            ),
        }),
    }
}

/// Parse a per-plant file, which must hold exactly one JSON object.
pub fn parse_plant_file(path: &Path) -> Result<PlantRecord> {
    match read_json(path)? {
        Value::Object(fields) => Ok(PlantRecord::new(fields)),
        other => Err(Error::InvalidRecord {
            location: format!("'{}'", path.display()),
            reason: format!("expected an object, found {}", json_type_name(&other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
