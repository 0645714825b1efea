use epicalc::metrics::required_sample_size;

#[test]
fn matches_hand_computed_sizes() {
    assert_eq!(required_sample_size(0.20, 0.05), Some(76));
    assert_eq!(required_sample_size(0.5, 0.4), Some(388));
    assert_eq!(required_sample_size(0.1, 0.2), Some(199));
}

#[test]
fn order_of_proportions_does_not_matter() {
    assert_eq!(
        required_sample_size(0.3, 0.1),
        required_sample_size(0.1, 0.3)
    );
}

#[test]
fn identical_proportions_have_no_size() {
    assert_eq!(required_sample_size(0.25, 0.25), None);
}

#[test]
fn invalid_proportions_have_no_size() {
    assert_eq!(required_sample_size(f64::NAN, 0.2), None);
    assert_eq!(required_sample_size(0.2, f64::NAN), None);
    assert_eq!(required_sample_size(-0.1, 0.2), None);
    assert_eq!(required_sample_size(0.2, 1.5), None);
}

#[test]
fn extreme_proportions_still_resolve() {
    assert_eq!(required_sample_size(0.0, 1.0), Some(2));
}
