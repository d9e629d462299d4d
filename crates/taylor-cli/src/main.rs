use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, reload};

use taylor_cli::{Cli, Config, report};
use taylor_core::parse_export;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Timewarrior's `debug: on` is only known after parsing, so keep the
    // filter swappable.
    let (filter, filter_handle) = reload::Layer::new(filter);
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();

    // Timewarrior writes the whole export before the extension runs.
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;
    let export =
        parse_export(input.as_bytes(), Utc::now()).context("failed to parse Timewarrior input")?;

    if export.debug_enabled() && !cli.verbose {
        let _ = filter_handle.modify(|filter| *filter = EnvFilter::new("debug"));
    }

    tracing::debug!(
        config_keys = export.config.len(),
        intervals = export.intervals.len(),
        open_intervals = export.open_intervals,
        "parsed extension input"
    );

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    report::run(&export, &config, &mut io::stdout().lock())
}
