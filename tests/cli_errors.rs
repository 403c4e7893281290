#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_evaluates_inline_request_as_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    let request = serde_json::json!({
        "transform": "fluorescence",
        "voltage": 4.0,
        "dark_output": 0.06,
        "scale_factor": 10.0
    })
    .to_string();

    cmd.arg("--json").arg("--inputs-json").arg(request);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"transform\": \"fluorescence\""))
        .stdout(predicate::str::contains("\"value\""));
}

#[test]
fn cli_reads_request_document_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    let doc = serde_json::json!({
        "transform": "conductivity",
        "frequency": 5631.59,
        "temperature": 1.0,
        "pressure": 1.0,
        "coefficients": {
            "g": -10.2100013,
            "h": 1.25794268,
            "i": -0.00229686787,
            "j": 0.000219007441
        }
    })
    .to_string();

    cmd.arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("conductivity: 2.949"));
}

#[test]
fn cli_reports_transform_failure() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    let request = serde_json::json!({
        "transform": "temperature",
        "frequency": 0.0,
        "coefficients": {"g": 4.39e-3, "h": 6.4e-4, "i": 2.2e-5, "j": 1.9e-6, "f0": 1000.0}
    })
    .to_string();

    cmd.arg("--inputs-json").arg(request);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Transform failed: temperature"));
}

#[test]
fn cli_verbose_logs_failure_context() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    let request = serde_json::json!({"transform": "coordinate", "text": "35 48.05 Q"}).to_string();

    cmd.arg("--verbose").arg("--inputs-json").arg(request);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("[WARN]"))
        .stderr(predicate::str::contains("unknown hemisphere"));
}

#[test]
fn cli_reports_invalid_json_for_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    cmd.arg("--inputs-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --inputs-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ctd_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}
