//! Plant index building from a directory of per-plant files
//!
//! # Error Handling Strategy
//!
//! Unlike the splitter, the indexer never skips: a single unreadable or malformed plant file
//! fails the whole build, and no index is written. A corrupt corpus should be fixed rather than
//! silently summarized without the broken plant.
//!
//! Files are visited in file name order so the same corpus always yields the same index.

pub mod builder;
pub mod discovery;

pub use builder::{build_index, create_index};
pub use discovery::discover_plant_files;
