pub mod output;
pub mod paths;

pub use output::{to_pretty_json, write_pretty_json, write_pretty_json_atomic};
pub use paths::{ensure_dir, has_parent_components, parent_dir, temp_sibling};
