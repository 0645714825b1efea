use assert_cmd::Command;

fn epicalc() -> Command {
    let mut cmd = Command::cargo_bin("epicalc").expect("binary exists");
    cmd.env("OUTPUTS_DIR", std::env::temp_dir().join("epicalc-smoke"));
    cmd
}

#[test]
fn cli_help_runs() {
    epicalc().arg("--help").assert().success();
}

#[test]
fn compute_prints_json() {
    let output = epicalc()
        .args([
            "compute", "-a", "10", "-b", "20", "-c", "10", "-d", "20", "--design",
            "case-control", "--goal", "desirable", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["relativeRisk"].is_null());
    assert!((value["oddsRatio"]["value"].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn compute_rejects_negative_counts() {
    epicalc()
        .args(["compute", "-a", "-1", "-b", "2", "-c", "3", "-d", "4"])
        .assert()
        .failure();
}

#[test]
fn sample_size_prints_per_group() {
    epicalc()
        .args(["sample-size", "--p1", "0.2", "--p2", "0.05"])
        .assert()
        .success()
        .stdout("76 per group\n");
}
