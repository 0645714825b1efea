//! CLI entry-point for sample size estimation.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{display::NOT_CALCULABLE, metrics::required_sample_size};

/// Args for the `sample-size` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Expected outcome proportion in the first group.
    #[arg(long)]
    pub p1: f64,
    /// Expected outcome proportion in the second group.
    #[arg(long)]
    pub p2: f64,
}

#[instrument]
pub async fn run(args: Args) -> Result<()> {
    match required_sample_size(args.p1, args.p2) {
        Some(n) => println!("{n} per group"),
        None => println!("{NOT_CALCULABLE}"),
    }
    Ok(())
}
