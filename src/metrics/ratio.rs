//! Relative risk and odds ratio with log-scale 95% confidence intervals.

use super::{
    result::RatioEstimate,
    significance::two_tailed_p_value,
    table::{ContingencyTable, CorrectedTable},
    Z_CRITICAL,
};

/// Odds ratio on continuity-corrected cells; `None` when raw `b` or `c` is zero.
pub fn odds_ratio(table: &ContingencyTable, corrected: &CorrectedTable) -> Option<RatioEstimate> {
    if table.b == 0 || table.c == 0 {
        return None;
    }
    let CorrectedTable { a, b, c, d } = *corrected;
    let or = (a * d) / (b * c);
    let variance = (1.0 / a) + (1.0 / b) + (1.0 / c) + (1.0 / d);
    Some(log_scale_estimate(or, variance.sqrt()))
}

/// Relative risk from raw risks, with the standard error taken from corrected cells.
pub fn relative_risk(
    risk_exposed: f64,
    risk_control: f64,
    corrected: &CorrectedTable,
) -> Option<RatioEstimate> {
    if risk_control <= 0.0 || risk_exposed < 0.0 {
        return None;
    }
    let rr = if risk_exposed == 0.0 {
        0.0
    } else {
        risk_exposed / risk_control
    };
    let variance = (1.0 - corrected.risk_exposed()) / corrected.a
        + (1.0 - corrected.risk_control()) / corrected.c;
    Some(log_scale_estimate(rr, variance.sqrt()))
}

fn log_scale_estimate(value: f64, se: f64) -> RatioEstimate {
    let log_value = value.ln();
    let z_stat = z_score(log_value, se);
    RatioEstimate {
        value,
        lower: (log_value - Z_CRITICAL * se).exp(),
        upper: (log_value + Z_CRITICAL * se).exp(),
        p_value: two_tailed_p_value(z_stat),
        z_stat,
    }
}

/// Convert a log ratio and its standard error to a z-score.
pub fn z_score(log_ratio: f64, se: f64) -> f64 {
    if se <= 0.0 {
        0.0
    } else {
        log_ratio / se
    }
}
