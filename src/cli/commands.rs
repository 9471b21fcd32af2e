use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use super::logging::init_tracing;
use crate::error::Error;
use crate::indexer::create_index;
use crate::splitter::{SplitOptions, split_file};

#[derive(Parser)]
#[command(name = "plantdex")]
#[command(version = "0.1.0")]
#[command(
    about = "Split plant collections into per-plant files and rebuild the plant index",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a plant collection into one <id>.json file per plant
    Split(SplitArgs),
    /// Build the plant index from a directory of per-plant files
    Index(IndexArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// JSON file holding one plant object or an array of plant objects
    #[arg(default_value = "plants.json")]
    pub input: PathBuf,

    /// Directory that receives the per-plant files
    #[arg(short, long, default_value = "plants")]
    pub output: PathBuf,

    /// Base directory for the image directories created from `image` fields
    #[arg(long, default_value = ".")]
    pub image_root: PathBuf,

    /// Fail on a missing or duplicate id instead of skipping or overwriting
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Directory of per-plant JSON files
    #[arg(default_value = "../plants")]
    pub input: PathBuf,

    /// Index file to write
    #[arg(short, long, default_value = "../plants-index.json")]
    pub output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        Some(Commands::Split(args)) => {
            split_command(args)?;
        }
        Some(Commands::Index(args)) => {
            index_command(args)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Process exit code for an error returned by [`run`]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(|e| e.kind().exit_code())
        .unwrap_or(1)
}

fn split_command(args: &SplitArgs) -> Result<()> {
    let options = SplitOptions { strict: args.strict, image_root: args.image_root.clone() };
    let report = split_file(&args.input, &args.output, &options)
        .with_context(|| format!("Failed to split '{}'", args.input.display()))?;

    println!("Wrote {} plant files to '{}'", report.count(), args.output.display());
    if !report.skipped.is_empty() {
        println!("  Skipped records: {}", report.skipped.len());
    }
    if !report.overwritten.is_empty() {
        println!("  Duplicate ids overwritten: {}", report.overwritten.len());
    }
    if !report.image_dirs.is_empty() {
        println!("  Image directories created: {}", report.image_dirs.len());
    }

    Ok(())
}

fn index_command(args: &IndexArgs) -> Result<()> {
    let count = create_index(&args.input, &args.output)
        .with_context(|| format!("Failed to build index from '{}'", args.input.display()))?;

    println!("Successfully created '{}' with {} plants.", args.output.display(), count);

    Ok(())
}
