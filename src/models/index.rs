use serde::Serialize;
use serde_json::Value;

use super::plant::PlantRecord;

/// Summary of one plant record as it appears in the plant index.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: Value,
    pub scientific_name: Value,
    pub common_names: Value,
    pub thumbnail: Value,
    pub tags: Value,
}

impl IndexEntry {
    /// The entry's id as a file stem, when it is a string or number.
    pub fn id_text(&self) -> Option<String> {
        match &self.id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<&PlantRecord> for IndexEntry {
    fn from(plant: &PlantRecord) -> Self {
        Self {
            id: plant.get("id").cloned().unwrap_or(Value::Null),
            scientific_name: plant.scientific_name(),
            common_names: plant.common_names(),
            thumbnail: plant.thumbnail(),
            tags: plant.tags(),
        }
    }
}
