//! Per-group sample size for comparing two proportions.

use super::Z_CRITICAL;

/// Standard normal quantile for 80% power.
pub const Z_BETA_80: f64 = 0.8416;

/// Per-group `n` giving 80% power at a two-tailed 5% level to tell `p1` from `p2`.
///
/// Returns `None` for identical proportions, `NaN`, or values outside `[0, 1]`.
pub fn required_sample_size(p1: f64, p2: f64) -> Option<u64> {
    if p1.is_nan() || p2.is_nan() || p1 == p2 {
        return None;
    }
    if !(0.0..=1.0).contains(&p1) || !(0.0..=1.0).contains(&p2) {
        return None;
    }
    let pooled = (p1 + p2) / 2.0;
    let numerator = Z_CRITICAL * (2.0 * pooled * (1.0 - pooled)).sqrt()
        + Z_BETA_80 * (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt();
    let effect = p1 - p2;
    let n = (numerator * numerator / (effect * effect)).ceil();
    // n >= 1 whenever p1 != p2
    Some(n as u64)
}
