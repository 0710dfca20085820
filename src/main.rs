//! Sentilex - lexicon-based sentiment scoring CLI
//!
//! A fast, local-first sentiment scorer that sums word weights from a
//! fixed lexicon and labels the result through a threshold policy.

use anyhow::Result;
use clap::Parser;
use sentilex::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    cli::run(cli)
}
