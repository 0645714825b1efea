//! Composes the per-metric computations into a single [`MetricsResult`].

use tracing::trace;

use super::{
    power::post_hoc_power,
    ratio::{odds_ratio, relative_risk},
    result::MetricsResult,
    risk::{impact_measures, number_needed, risk_difference, Risks},
    table::{ContingencyTable, StudyDesign, StudyGoal},
};

/// Compute every metric that is valid for `table` under `design` and `goal`.
///
/// Never fails: metrics that cannot be computed for the given counts or design
/// are left as `None`.
pub fn compute_metrics(
    table: &ContingencyTable,
    design: StudyDesign,
    goal: StudyGoal,
) -> MetricsResult {
    let corrected = table.corrected();
    let builder = MetricsResult::builder().odds_ratio(odds_ratio(table, &corrected));

    if !design.supports_incidence() {
        trace!(%design, "incidence metrics disabled for design");
        return builder.build();
    }

    let Some(risks) = Risks::from_table(table) else {
        trace!(
            exposed_total = table.exposed_total(),
            control_total = table.control_total(),
            "empty group; incidence metrics skipped"
        );
        return builder.build();
    };

    let rd = risk_difference(&risks, &corrected);
    builder
        .risks(risks.exposed, risks.control)
        .risk_difference(Some(rd))
        .impact_measures(impact_measures(&risks, goal))
        .relative_risk(relative_risk(risks.exposed, risks.control, &corrected))
        .nnt(number_needed(&rd, goal))
        .power(Some(post_hoc_power(table, &risks)))
        .build()
}
