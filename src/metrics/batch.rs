//! CSV batch processing: one 2x2 table per input row, one metrics row out.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{
    compute_metrics,
    table::{ContingencyTable, StudyDesign, StudyGoal},
    MetricsResult,
};

#[derive(Debug, Deserialize)]
struct InputRow {
    label: String,
    #[serde(default)]
    a: Option<String>,
    #[serde(default)]
    b: Option<String>,
    #[serde(default)]
    c: Option<String>,
    #[serde(default)]
    d: Option<String>,
    #[serde(default)]
    design: Option<String>,
    #[serde(default)]
    goal: Option<String>,
}

/// Flat output record; `None` becomes an empty CSV field.
#[derive(Debug, Serialize)]
struct OutputRow {
    label: String,
    design: StudyDesign,
    goal: StudyGoal,
    a: u64,
    b: u64,
    c: u64,
    d: u64,
    risk_exposed: Option<f64>,
    risk_control: Option<f64>,
    rd: Option<f64>,
    rd_ci_low: Option<f64>,
    rd_ci_high: Option<f64>,
    rr: Option<f64>,
    rr_ci_low: Option<f64>,
    rr_ci_high: Option<f64>,
    rr_p: Option<String>,
    or: Option<f64>,
    or_ci_low: Option<f64>,
    or_ci_high: Option<f64>,
    or_p: Option<String>,
    absolute_impact: Option<String>,
    absolute_impact_value: Option<f64>,
    relative_impact: Option<String>,
    relative_impact_value: Option<f64>,
    nnt: Option<f64>,
    nnt_type: Option<String>,
    nnt_ci_low: Option<f64>,
    nnt_ci_high: Option<f64>,
    power: Option<f64>,
    type1_error: Option<f64>,
    type2_error: Option<f64>,
}

impl OutputRow {
    fn new(
        label: String,
        table: ContingencyTable,
        design: StudyDesign,
        goal: StudyGoal,
        m: &MetricsResult,
    ) -> Self {
        let impact = m.impact_measures.as_ref();
        Self {
            label,
            design,
            goal,
            a: table.a,
            b: table.b,
            c: table.c,
            d: table.d,
            risk_exposed: m.absolute_risk_exposed,
            risk_control: m.absolute_risk_control,
            rd: m.risk_difference.map(|e| e.value),
            rd_ci_low: m.risk_difference.map(|e| e.lower),
            rd_ci_high: m.risk_difference.map(|e| e.upper),
            rr: m.relative_risk.map(|e| e.value),
            rr_ci_low: m.relative_risk.map(|e| e.lower),
            rr_ci_high: m.relative_risk.map(|e| e.upper),
            rr_p: m.relative_risk.map(|e| e.p_value.to_string()),
            or: m.odds_ratio.map(|e| e.value),
            or_ci_low: m.odds_ratio.map(|e| e.lower),
            or_ci_high: m.odds_ratio.map(|e| e.upper),
            or_p: m.odds_ratio.map(|e| e.p_value.to_string()),
            absolute_impact: impact.map(|i| i.absolute.label.abbreviation().to_string()),
            absolute_impact_value: impact.map(|i| i.absolute.value),
            relative_impact: impact.map(|i| i.relative.label.abbreviation().to_string()),
            relative_impact_value: impact.map(|i| i.relative.value),
            nnt: m.nnt.map(|n| n.value),
            nnt_type: m.nnt.map(|n| n.kind.to_string()),
            nnt_ci_low: m.nnt.map(|n| n.lower),
            nnt_ci_high: m.nnt.map(|n| n.upper),
            power: m.power,
            type1_error: m.type1_error,
            type2_error: m.type2_error,
        }
    }
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Read tables from `reader`, write one metrics row per valid table to `writer`.
///
/// Rows with invalid counts or unknown design/goal tokens are logged and skipped.
pub fn process<R: Read, W: Write>(
    reader: R,
    writer: W,
    default_design: StudyDesign,
    default_goal: StudyGoal,
) -> Result<BatchSummary> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut writer = Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for (idx, record) in reader.deserialize::<InputRow>().enumerate() {
        let line = idx + 2;
        let row = record.with_context(|| format!("reading batch row at line {line}"))?;
        let parsed = parse_row(&row, default_design, default_goal);
        match parsed {
            Ok((table, design, goal)) => {
                let metrics = compute_metrics(&table, design, goal);
                writer.serialize(OutputRow::new(row.label, table, design, goal, &metrics))?;
                summary.written += 1;
            }
            Err(err) => {
                warn!(line, label = %row.label, %err, "skipping invalid batch row");
                summary.skipped += 1;
            }
        }
    }

    writer.flush().context("flushing batch output")?;
    Ok(summary)
}

fn parse_row(
    row: &InputRow,
    default_design: StudyDesign,
    default_goal: StudyGoal,
) -> Result<(ContingencyTable, StudyDesign, StudyGoal)> {
    let table = ContingencyTable::parse_cells(
        row.a.as_deref(),
        row.b.as_deref(),
        row.c.as_deref(),
        row.d.as_deref(),
    )?;
    let design = match row.design.as_deref().filter(|s| !s.is_empty()) {
        Some(token) => token.parse()?,
        None => default_design,
    };
    let goal = match row.goal.as_deref().filter(|s| !s.is_empty()) {
        Some(token) => token.parse()?,
        None => default_goal,
    };
    Ok((table, design, goal))
}

/// File-based wrapper around [`process`].
pub fn run(
    input: &Path,
    output: &Path,
    default_design: StudyDesign,
    default_goal: StudyGoal,
) -> Result<BatchSummary> {
    let source = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let sink = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let summary = process(source, sink, default_design, default_goal)?;
    info!(
        path = %output.display(),
        rows = summary.written,
        skipped = summary.skipped,
        "wrote batch metrics"
    );
    Ok(summary)
}
