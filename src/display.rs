//! Caller-side formatting of engine output for terminal reports.

use crate::metrics::{
    required_sample_size, ContingencyTable, MetricsResult, NumberNeeded, RatioEstimate,
    StudyDesign, StudyGoal,
};

pub const NOT_CALCULABLE: &str = "not calculable";

/// Power below which the report suggests a sample size.
pub const TARGET_POWER: f64 = 0.8;

/// Four decimal places, with infinities rendered as `∞`/`-∞`.
pub fn decimal(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "∞".into() } else { "-∞".into() }
    } else {
        format!("{value:.4}")
    }
}

/// Proportion rendered as a percentage with two decimals.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn optional(value: Option<f64>, render: fn(f64) -> String) -> String {
    value.map(render).unwrap_or_else(|| NOT_CALCULABLE.to_string())
}

/// Orders a pair of bounds so the smaller comes first.
pub fn ordered_bounds(lower: f64, upper: f64) -> (f64, f64) {
    if lower > upper {
        (upper, lower)
    } else {
        (lower, upper)
    }
}

pub fn interval(lower: f64, upper: f64) -> String {
    format!("[{}, {}]", decimal(lower), decimal(upper))
}

fn ratio_line(name: &str, estimate: Option<&RatioEstimate>) -> String {
    match estimate {
        Some(e) => format!(
            "{name}: {} 95% CI {} (z = {}, p = {})",
            decimal(e.value),
            interval(e.lower, e.upper),
            decimal(e.z_stat),
            e.p_value
        ),
        None => format!("{name}: {NOT_CALCULABLE}"),
    }
}

fn nnt_line(nnt: Option<&NumberNeeded>) -> String {
    match nnt {
        Some(n) => {
            let (lower, upper) = ordered_bounds(n.lower, n.upper);
            format!(
                "{} ({}): {} 95% CI {}",
                n.kind.abbreviation(),
                n.kind,
                decimal(n.value),
                interval(lower, upper)
            )
        }
        None => format!("NNT/NNH: {NOT_CALCULABLE}"),
    }
}

/// Multi-line plain text report for one computation.
pub fn render_report(
    table: &ContingencyTable,
    design: StudyDesign,
    goal: StudyGoal,
    metrics: &MetricsResult,
) -> String {
    let mut lines = vec![
        format!(
            "Table a={} b={} c={} d={} | design: {design} | goal: {goal}",
            table.a, table.b, table.c, table.d
        ),
        format!(
            "Absolute risk (exposed): {}",
            optional(metrics.absolute_risk_exposed, percent)
        ),
        format!(
            "Absolute risk (control): {}",
            optional(metrics.absolute_risk_control, percent)
        ),
    ];
    lines.push(match metrics.risk_difference {
        Some(rd) => format!(
            "Risk difference: {} 95% CI {}",
            decimal(rd.value),
            interval(rd.lower, rd.upper)
        ),
        None => format!("Risk difference: {NOT_CALCULABLE}"),
    });
    lines.push(ratio_line("Relative risk", metrics.relative_risk.as_ref()));
    lines.push(ratio_line("Odds ratio", metrics.odds_ratio.as_ref()));
    match metrics.impact_measures {
        Some(impact) => {
            lines.push(format!("{}: {}", impact.absolute.label, percent(impact.absolute.value)));
            lines.push(format!("{}: {}", impact.relative.label, percent(impact.relative.value)));
        }
        None => lines.push(format!("Impact measures: {NOT_CALCULABLE}")),
    }
    lines.push(nnt_line(metrics.nnt.as_ref()));
    lines.push(format!("Power: {}", optional(metrics.power, percent)));
    lines.push(format!("Type I error: {}", optional(metrics.type1_error, decimal)));
    lines.push(format!("Type II error: {}", optional(metrics.type2_error, decimal)));

    if let (Some(power), Some(exposed), Some(control)) = (
        metrics.power,
        metrics.absolute_risk_exposed,
        metrics.absolute_risk_control,
    ) {
        if power < TARGET_POWER {
            if let Some(n) = required_sample_size(exposed, control) {
                lines.push(format!("Suggested sample size for 80% power: {n} per group"));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
