use epicalc::metrics::{cdf, two_tailed_p_value, PValue};
use proptest::prelude::*;

#[test]
fn cdf_is_half_at_zero() {
    assert_eq!(cdf(0.0), 0.5);
}

#[test]
fn cdf_matches_reference_quantiles() {
    assert!((cdf(1.96) - 0.975).abs() < 1e-4);
    assert!((cdf(-1.96) - 0.025).abs() < 1e-4);
    assert!((cdf(1.0) - 0.841345).abs() < 1e-5);
}

#[test]
fn cdf_handles_infinities() {
    assert_eq!(cdf(f64::INFINITY), 1.0);
    assert_eq!(cdf(f64::NEG_INFINITY), 0.0);
}

#[test]
fn p_value_at_zero_is_one() {
    let p = two_tailed_p_value(0.0);
    assert_eq!(p.to_string(), "1.0000");
}

#[test]
fn p_value_at_critical_z_is_five_percent() {
    assert_eq!(two_tailed_p_value(1.96).to_string(), "0.0500");
    assert_eq!(two_tailed_p_value(-1.96).to_string(), "0.0500");
}

#[test]
fn p_value_floors_for_large_z() {
    assert!(!two_tailed_p_value(3.7).is_below_floor());
    assert_eq!(two_tailed_p_value(3.9), PValue::BelowFloor);
    assert_eq!(two_tailed_p_value(-12.0).to_string(), "<0.0001");
    assert_eq!(two_tailed_p_value(f64::NEG_INFINITY).to_string(), "<0.0001");
}

proptest! {
    #[test]
    fn cdf_is_symmetric(x in -40.0f64..40.0) {
        prop_assert!((cdf(-x) - (1.0 - cdf(x))).abs() < 1e-6);
    }

    #[test]
    fn cdf_is_monotone(x in -10.0f64..10.0, step in 0.0f64..5.0) {
        prop_assert!(cdf(x + step) >= cdf(x));
    }

    #[test]
    fn cdf_stays_in_unit_interval(x in proptest::num::f64::NORMAL) {
        let value = cdf(x);
        prop_assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn p_value_ignores_sign(z in -10.0f64..10.0) {
        prop_assert_eq!(two_tailed_p_value(z), two_tailed_p_value(-z));
    }
}
