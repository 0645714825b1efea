//! CLI entry-point for CSV batch computation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    metrics::{batch, StudyDesign, StudyGoal},
};

/// Args for the `batch` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// CSV with `label,a,b,c,d` and optional `design,goal` columns.
    #[arg(long)]
    pub input: PathBuf,
    /// Output CSV; defaults to `OUTPUTS_DIR/metrics.csv`.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Design for rows without one.
    #[arg(long, value_enum)]
    pub design: Option<StudyDesign>,
    /// Goal for rows without one.
    #[arg(long, value_enum)]
    pub goal: Option<StudyGoal>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| settings.join_output("metrics.csv"));
    let design = args.design.unwrap_or(settings.default_design);
    let goal = args.goal.unwrap_or(settings.default_goal);
    info!(input = %args.input.display(), "running batch");
    let summary = batch::run(&args.input, &output, design, goal)?;
    println!(
        "wrote {} rows to {} ({} skipped)",
        summary.written,
        output.display(),
        summary.skipped
    );
    Ok(())
}
