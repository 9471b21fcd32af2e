//! Command-line interface for the `plantdex` binary

pub mod commands;
pub mod logging;

pub use commands::{Cli, Commands, IndexArgs, SplitArgs, exit_code, run};
pub use logging::init_tracing;
