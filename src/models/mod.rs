//! Data models for plant records and the plant index.
//!
//! - [`PlantRecord`] - One plant as stored in the master file or a per-plant file
//! - [`PlantId`] - Validated identifier that names a per-plant file
//! - [`IndexEntry`] - Summary of a plant record used by listing and search views
//!
//! Plant records stay untyped JSON objects so they round-trip unchanged; field
//! defaults live in the [`PlantRecord`] accessors.

pub mod index;
pub mod plant;

pub use index::IndexEntry;
pub use plant::{IdProblem, ImageRef, PLACEHOLDER_THUMBNAIL, PlantId, PlantRecord};
