//! Splitting a plant collection into per-plant files
//!
//! # Error Handling Strategy
//!
//! - **Missing ids**: a record without a usable `id` is logged and skipped; the run continues.
//!   With [`SplitOptions::strict`] the run aborts instead, naming the record position.
//! - **Duplicate ids**: the later record overwrites the earlier file and a warning names both
//!   positions. Strict mode aborts before the second write.
//! - **Everything else** (missing input, malformed JSON, filesystem errors) aborts the run.
//!   Files already written stay on disk; there is no rollback.

pub mod report;
pub mod split;

pub use report::{OverwrittenRecord, SkippedRecord, SplitReport};
pub use split::{SplitOptions, split_file, split_records};
