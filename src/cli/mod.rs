//! Command-line interface wiring for epicalc.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod batch;
pub mod compute;
pub mod sample_size;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Association, impact and power statistics for 2x2 tables",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Compute(args) => compute::run(args, settings).await,
            Commands::SampleSize(args) => sample_size::run(args).await,
            Commands::Batch(args) => batch::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute all metrics for one 2x2 table.
    Compute(compute::Args),
    /// Per-group sample size for 80% power between two proportions.
    SampleSize(sample_size::Args),
    /// Compute metrics for every table in a CSV file.
    Batch(batch::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}
