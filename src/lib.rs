//! plantdex - Split plant collections into per-plant files and index them
//!
//! This library converts between the three shapes plant data takes on disk:
//!
//! - A plant collection: one JSON file holding a plant object or an array of them
//! - A plant directory: one `<id>.json` file per plant
//! - A plant index: one JSON array summarizing every plant in a directory
//!
//! The splitter turns a collection into a directory and the indexer turns a directory
//! into an index. They share the [`PlantRecord`] model and communicate only through
//! the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use plantdex::{SplitOptions, create_index, split_file};
//!
//! let options = SplitOptions::default();
//! let report = split_file(Path::new("plants.json"), Path::new("plants"), &options)?;
//! println!("Wrote {} plant files", report.count());
//!
//! let count = create_index(Path::new("plants"), Path::new("plants-index.json"))?;
//! println!("Indexed {} plants", count);
//! # Ok::<(), plantdex::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod splitter;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use indexer::{build_index, create_index, discover_plant_files};
pub use models::{IndexEntry, PlantId, PlantRecord};
pub use splitter::{SplitOptions, SplitReport, split_file, split_records};
