use epicalc::{
    display::{decimal, ordered_bounds, percent, render_report, NOT_CALCULABLE},
    metrics::{compute_metrics, ContingencyTable, StudyDesign, StudyGoal},
};

#[test]
fn formats_numbers_for_reports() {
    assert_eq!(decimal(1.0 / 3.0), "0.3333");
    assert_eq!(decimal(f64::INFINITY), "∞");
    assert_eq!(decimal(f64::NEG_INFINITY), "-∞");
    assert_eq!(percent(0.2), "20.00%");
}

#[test]
fn swaps_inverted_bounds() {
    assert_eq!(ordered_bounds(2.0, -3.0), (-3.0, 2.0));
    assert_eq!(ordered_bounds(1.0, 4.0), (1.0, 4.0));
}

#[test]
fn case_control_report_marks_missing_metrics() {
    let table = ContingencyTable::new(10, 20, 10, 20);
    let metrics = compute_metrics(&table, StudyDesign::CaseControl, StudyGoal::Desirable);
    let report = render_report(&table, StudyDesign::CaseControl, StudyGoal::Desirable, &metrics);
    assert!(report.contains("design: case-control"));
    assert!(report.contains(&format!("Relative risk: {NOT_CALCULABLE}")));
    assert!(report.contains("Odds ratio: 1.0000"));
    assert!(!report.contains("Suggested sample size"));
    assert!(report.ends_with('\n'));
    assert_eq!(report.lines().count(), 11);
}

#[test]
fn underpowered_report_suggests_sample_size() {
    let table = ContingencyTable::new(3, 7, 2, 8);
    let metrics = compute_metrics(&table, StudyDesign::Rct, StudyGoal::Undesirable);
    let report = render_report(&table, StudyDesign::Rct, StudyGoal::Undesirable, &metrics);
    assert!(report.contains("NNH (Harm): 10.0000"));
    assert!(report.contains("Absolute Risk Increase (ARI): 10.00%"));
    assert!(report.contains("Suggested sample size for 80% power:"));
}
