//! JSON readers for plant collections and per-plant files
//!
//! # Error Handling Strategy
//!
//! Reading is all-or-nothing per file:
//!
//! - **Missing files** map to [`Error::NotFound`](crate::Error::NotFound) so callers can
//!   report them distinctly from other I/O failures.
//! - **Malformed JSON** (including invalid UTF-8) maps to [`Error::Parse`](crate::Error::Parse)
//!   carrying the offending path.
//! - **Wrong shape** (a valid document that is not an object, or an array with a non-object
//!   element) maps to [`Error::InvalidRecord`](crate::Error::InvalidRecord).
//!
//! Record-level policy (skipping records without an id) belongs to the splitter, not here.

pub mod plants;

pub use plants::{parse_plant_collection, parse_plant_file, read_json, records_from_value};
