//! Standard normal distribution via the Abramowitz & Stegun 7.1.26 error
//! function approximation (max absolute error ~1.5e-7).

const P: f64 = 0.3275911;
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;

/// Error function evaluated at `|x|`; the caller applies the sign.
fn erf_abs(x: f64) -> f64 {
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    1.0 - poly * (-x * x).exp()
}

/// Standard normal cumulative distribution at `x`.
///
/// Accepts any finite value as well as `±∞`. `NaN` must not be passed.
pub fn cdf(x: f64) -> f64 {
    let z = x / std::f64::consts::SQRT_2;
    let sign = if z > 0.0 {
        1.0
    } else if z < 0.0 {
        -1.0
    } else {
        0.0
    };
    0.5 * (1.0 + sign * erf_abs(z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erf_reference_points() {
        assert!(erf_abs(0.0).abs() < 1e-8);
        assert!((erf_abs(1.0) - 0.8427007929).abs() < 1e-6);
        assert!((erf_abs(-0.5) - erf_abs(0.5)).abs() < 1e-12);
    }
}
