//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Timewarrior report of time spent per distinguishing tag set.
///
/// Reads Timewarrior's extension input on stdin, strips the tags shared by
/// every interval, and prints one comma-separated line per remaining tag set
/// with its total duration and a bar relative to the largest set.
#[derive(Debug, Parser)]
#[command(name = "timew-taylor", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
