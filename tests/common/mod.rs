//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temporary workspace holding plant collections and plant directories
pub struct PlantDirBuilder {
    temp_dir: TempDir,
}

impl PlantDirBuilder {
    /// Create a new builder with an empty workspace
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the workspace root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a collection file (`plants.json`) holding the given plants as an array
    pub fn with_collection(self, plants: &[PlantBuilder]) -> Self {
        let value = Value::Array(plants.iter().map(PlantBuilder::to_value).collect());
        self.with_raw_file("plants.json", &serde_json::to_string_pretty(&value).unwrap())
    }

    /// Write one plant file per plant into `dir_name`, named `<id>.json`
    pub fn with_plant_dir(self, dir_name: &str, plants: &[PlantBuilder]) -> Self {
        let dir = self.temp_dir.path().join(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create plant dir");
        for plant in plants {
            let name = format!("{}.json", plant.file_stem());
            fs::write(dir.join(name), plant.to_json()).expect("Failed to write plant file");
        }
        self
    }

    /// Write arbitrary content to a path relative to the workspace
    pub fn with_raw_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for PlantDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for plant records
#[derive(Clone)]
pub struct PlantBuilder {
    fields: serde_json::Map<String, Value>,
}

impl PlantBuilder {
    /// Create a plant with the given id and a scientific name derived from it
    pub fn new(id: &str) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("id".into(), json!(id));
        fields.insert("scientificName".into(), json!(format!("Plantae {}", id)));
        Self { fields }
    }

    /// Create a plant without an id field
    pub fn without_id() -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("scientificName".into(), json!("Incognita anonyma"));
        Self { fields }
    }

    /// Set any field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn common_names(self, names: &[&str]) -> Self {
        self.field("commonNames", json!(names))
    }

    pub fn gallery(self, images: &[&str]) -> Self {
        self.field("gallery", json!(images))
    }

    pub fn tags(self, tags: &[&str]) -> Self {
        self.field("tags", json!(tags))
    }

    pub fn image(self, path: &str) -> Self {
        self.field("image", json!(path))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.to_value()).unwrap()
    }

    fn file_stem(&self) -> String {
        match self.fields.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unnamed".to_string(),
        }
    }
}

/// Read and parse a JSON file
pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", path.display(), e))
}

/// Names of the entries in `dir`, sorted
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// A realistic small catalog used by end-to-end tests
pub fn sample_catalog() -> Vec<PlantBuilder> {
    vec![
        PlantBuilder::new("monstera-deliciosa")
            .common_names(&["Swiss cheese plant", "Split-leaf philodendron"])
            .gallery(&["images/monstera/1.jpg", "images/monstera/2.jpg"])
            .tags(&["indoor", "tropical"])
            .image("images/monstera/hero.jpg"),
        PlantBuilder::new("aloe-vera")
            .common_names(&["Aloe"])
            .tags(&["succulent"])
            .field("measurements", measurements()),
        PlantBuilder::new("nephrolepis-exaltata")
            .common_names(&["Boston fern"])
            .gallery(&[])
            .field("care", json!({"water": "keep moist", "light": "indirect"})),
    ]
}

/// Numeric fields that only survive a split when numbers are kept as written
pub fn measurements() -> Value {
    serde_json::from_str(
        r#"{
            "specimenCount": 123456789012345678901234567890,
            "seed": 18446744073709551617,
            "phRange": [6.1, 7.000000000000001],
            "growthRate": 0.30000000000000004,
            "minTemperature": -0.0,
            "heightsCm": [[12, 15.5], [-3, 1e-7, 2.5E+10]]
        }"#,
    )
    .expect("measurements fixture is valid JSON")
}

pub fn plant_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}
