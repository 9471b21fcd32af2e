use std::path::PathBuf;

use crate::models::{IdProblem, PlantId};

/// A record that produced no file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position in the input collection
    pub position: usize,
    pub reason: IdProblem,
}

/// A record whose id was already written earlier in the same run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwrittenRecord {
    pub id: PlantId,
    pub first: usize,
    pub position: usize,
}

/// Outcome of a split run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Distinct per-plant files written, in first-write order
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedRecord>,
    pub overwritten: Vec<OverwrittenRecord>,
    /// Image directories that did not exist and were created
    pub image_dirs: Vec<PathBuf>,
}

impl SplitReport {
    /// Number of per-plant files written
    pub fn count(&self) -> usize {
        self.written.len()
    }
}
