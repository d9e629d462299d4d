//! Timewarrior tag-set report CLI library.
//!
//! This crate provides the CLI interface and report printer for
//! `timew-taylor`.

mod cli;
mod config;
pub mod report;

pub use cli::Cli;
pub use config::Config;
