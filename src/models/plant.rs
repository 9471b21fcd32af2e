use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Thumbnail used when a record has no usable `gallery`.
pub const PLACEHOLDER_THUMBNAIL: &str = "images/placeholder.jpg";

/// A single plant record.
///
/// The record is kept as an untyped JSON object so that splitting writes it back
/// exactly as read. The accessors below are the only place field defaults are
/// applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantRecord(Map<String, Value>);

/// Why a record has no identifier that can be used as a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdProblem {
    /// `id` is absent or falsy (`null`, `false`, `0`, `""`, `[]`, `{}`)
    Missing,
    /// `id` is present but cannot name a file
    Unusable(String),
}

/// The `image` field of a record, when it is set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageRef<'a> {
    Path(&'a Path),
    NotAString(&'a Value),
}

impl PlantRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Identifier used to name this record's file.
    pub fn plant_id(&self) -> Result<PlantId, IdProblem> {
        match self.0.get("id") {
            Some(value) => PlantId::from_value(value),
            None => Err(IdProblem::Missing),
        }
    }

    /// The `image` field, or `None` when it is absent or falsy.
    pub fn image(&self) -> Option<ImageRef<'_>> {
        let value = self.0.get("image").filter(|v| !is_falsy(v))?;
        match value {
            Value::String(s) => Some(ImageRef::Path(Path::new(s))),
            other => Some(ImageRef::NotAString(other)),
        }
    }

    /// `scientificName` verbatim, `null` when absent.
    pub fn scientific_name(&self) -> Value {
        self.0.get("scientificName").cloned().unwrap_or(Value::Null)
    }

    /// `commonNames` verbatim, `null` when absent.
    pub fn common_names(&self) -> Value {
        self.0.get("commonNames").cloned().unwrap_or(Value::Null)
    }

    /// First `gallery` element, or [`PLACEHOLDER_THUMBNAIL`] when the gallery is
    /// absent, empty or not a list.
    pub fn thumbnail(&self) -> Value {
        match self.0.get("gallery") {
            Some(Value::Array(images)) if !images.is_empty() => images[0].clone(),
            _ => Value::String(PLACEHOLDER_THUMBNAIL.to_string()),
        }
    }

    /// `tags` verbatim when present, otherwise an empty list.
    pub fn tags(&self) -> Value {
        self.0.get("tags").cloned().unwrap_or_else(|| Value::Array(Vec::new()))
    }
}

/// A plant identifier that is safe to use as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlantId(String);

impl PlantId {
    /// Validate a raw `id` value.
    ///
    /// Strings are used as-is and non-zero numbers by their JSON text. Falsy
    /// values count as missing.
    pub fn from_value(value: &Value) -> Result<Self, IdProblem> {
        if is_falsy(value) {
            return Err(IdProblem::Missing);
        }
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => Self::parse(&n.to_string()),
            Value::Bool(_) => Err(IdProblem::Unusable("a boolean cannot name a file".into())),
            Value::Array(_) => Err(IdProblem::Unusable("a list cannot name a file".into())),
            Value::Object(_) => Err(IdProblem::Unusable("an object cannot name a file".into())),
            Value::Null => Err(IdProblem::Missing),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, IdProblem> {
        if raw.is_empty() {
            return Err(IdProblem::Missing);
        }
        if raw == "." || raw == ".." {
            return Err(IdProblem::Unusable(format!("'{}' is a reserved path name", raw)));
        }
        if raw.contains(['/', '\\', '\0']) {
            return Err(IdProblem::Unusable(format!(
                "'{}' contains a path separator or NUL byte",
                raw.escape_default()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<id>.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for IdProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdProblem::Missing => f.write_str("missing 'id'"),
            IdProblem::Unusable(reason) => f.write_str(reason),
        }
    }
}

/// JSON truthiness as the plant data has always been interpreted.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
