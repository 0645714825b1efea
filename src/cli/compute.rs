//! CLI entry-point for a single table computation.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    display,
    metrics::{compute_metrics, ContingencyTable, StudyDesign, StudyGoal},
};

/// Args for the `compute` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Exposed with outcome.
    #[arg(short, long)]
    pub a: u64,
    /// Exposed without outcome.
    #[arg(short, long)]
    pub b: u64,
    /// Control with outcome.
    #[arg(short, long)]
    pub c: u64,
    /// Control without outcome.
    #[arg(short, long)]
    pub d: u64,
    /// Study design; falls back to DEFAULT_STUDY_DESIGN.
    #[arg(long, value_enum)]
    pub design: Option<StudyDesign>,
    /// Whether the outcome is desirable; falls back to DEFAULT_STUDY_GOAL.
    #[arg(long, value_enum)]
    pub goal: Option<StudyGoal>,
    /// Print the result as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let table = ContingencyTable::new(args.a, args.b, args.c, args.d);
    let design = args.design.unwrap_or(settings.default_design);
    let goal = args.goal.unwrap_or(settings.default_goal);
    info!(?table, %design, %goal, "computing metrics");

    let metrics = compute_metrics(&table, design, goal);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print!("{}", display::render_report(&table, design, goal, &metrics));
    }
    Ok(())
}
