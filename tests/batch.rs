use std::fs;

use epicalc::metrics::{batch, StudyDesign, StudyGoal};

const INPUT: &str = "\
label,a,b,c,d,design,goal
trial,20,80,5,95,,
registry,10,20,10,20,case-control,desirable
broken,1,-2,3,4,,
";

#[test]
fn writes_one_row_per_valid_table() {
    let mut out = Vec::new();
    let summary = batch::process(
        INPUT.as_bytes(),
        &mut out,
        StudyDesign::CohortProspective,
        StudyGoal::Undesirable,
    )
    .unwrap();
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 1);

    let text = String::from_utf8(out).unwrap();
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);

    let col = |name: &str| headers.iter().position(|h| h == name).unwrap();
    assert_eq!(&rows[0][col("label")], "trial");
    assert_eq!(&rows[0][col("design")], "cohort-prospective");
    assert_eq!(&rows[0][col("nnt_type")], "Harm");
    assert_eq!(&rows[0][col("absolute_impact")], "ARI");
    assert_eq!(&rows[0][col("rr_p")], "0.0038");

    assert_eq!(&rows[1][col("design")], "case-control");
    assert_eq!(&rows[1][col("risk_exposed")], "");
    assert_eq!(&rows[1][col("power")], "");
    assert_eq!(&rows[1][col("or_p")], "1.0000");
}

#[test]
fn run_creates_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tables.csv");
    let output = dir.path().join("nested/metrics.csv");
    fs::write(&input, "label,a,b,c,d\nsmall,3,7,2,8\n").unwrap();

    let summary = batch::run(&input, &output, StudyDesign::Rct, StudyGoal::Desirable).unwrap();
    assert_eq!(summary.written, 1);
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("label,design,goal,a,b,c,d"));
    assert!(written.contains("small,rct,desirable,3,7,2,8"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = batch::run(
        &dir.path().join("absent.csv"),
        &dir.path().join("out.csv"),
        StudyDesign::Rct,
        StudyGoal::Desirable,
    );
    assert!(result.is_err());
}
