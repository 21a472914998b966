//! Command-line behaviour of the `helio` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REPORT: &str = "Project Name  Acme Solar\n\
    Project Address  12 Main St\nDenver, CO 80202 USA\n\
    Annual Production  12.5 MWh\n\
    Performance Ratio  80.2%\n\
    Inverters  SMA Sunny Boy 7.7 (SMA)  2 (15.4 kW)\n\
    Module  REC Alpha 400 (400W)  40 (16.0 kW)\n\
    Shading: 3.4%\n\
    Soiling: 2.0%\n\
    January  120.3  110.5  5.2  1,234.0  1,100.5\n";

/// A `helio` command isolated from the user's configuration directory.
fn helio(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("helio").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn write_report(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, REPORT).unwrap();
    path
}

#[test]
fn test_process_text_to_json() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "report.txt");

    let output = helio(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["projectInfo"]["Project Name"], "Acme Solar");
    assert_eq!(json["projectInfo"]["Project Address"], "12 Main St, Denver, CO 80202");
    assert_eq!(json["inverters"][0]["count"], "2");
    assert_eq!(json["modules"][0]["description"], "REC Alpha 400 (400W)");
    assert_eq!(json["losses"].as_array().unwrap().len(), 2);
    assert_eq!(json["monthlyProduction"][0]["gridKWh"], "1,100.5");
}

#[test]
fn test_process_losses_table_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "report.txt");

    helio(dir.path())
        .args(["process", "-f", "csv", "--table", "losses"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Loss Type,Loss (%)\nShading,3.4\nSoiling,2.0\n"));
}

#[test]
fn test_process_text_format() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "report.txt");

    helio(dir.path())
        .args(["process", "-f", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inverter Information:"))
        .stdout(predicate::str::contains("Capacity: 15.4 kW"));
}

#[test]
fn test_process_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "report.txt");
    let out = dir.path().join("out.json");

    helio(dir.path())
        .arg("process")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Acme Solar"));
}

#[test]
fn test_process_invalid_pdf_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.pdf");
    fs::write(&input, "this is not a pdf").unwrap();

    helio(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse PDF"));
}

#[test]
fn test_process_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    helio(dir.path())
        .args(["process", "nope.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_process_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("report.png");
    fs::write(&input, REPORT).unwrap();

    helio(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_batch_with_summary() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "a.txt");
    write_report(dir.path(), "b.txt");
    fs::write(dir.path().join("c.pdf"), "garbage").unwrap();
    let out_dir = dir.path().join("out");
    let pattern = format!("{}/*", dir.path().display());

    helio(dir.path())
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 1 failed"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());
    assert!(!out_dir.join("c.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("filename,status,project_name"));
    assert!(lines[1].starts_with("a.txt,success,Acme Solar,12.5,80.2,2,2,1,0,1100.5,"));
    assert!(lines[3].starts_with("c.pdf,error,"));
}

#[test]
fn test_batch_stops_on_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.pdf"), "garbage").unwrap();
    let pattern = format!("{}/*.pdf", dir.path().display());

    helio(dir.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();

    helio(dir.path())
        .args(["config", "set", "pdf.min_text_length", "10"])
        .assert()
        .success();

    helio(dir.path())
        .args(["config", "get", "pdf.min_text_length"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));

    helio(dir.path())
        .args(["config", "set", "extraction.disabled_rules", r#"["nope"]"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown rule name"));
}

#[test]
fn test_disabled_rules_from_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "report.txt");
    let config = dir.path().join("helio.json");
    fs::write(&config, r#"{"extraction": {"disabled_rules": ["losses"]}}"#).unwrap();

    let output = helio(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json["losses"].as_array().unwrap().is_empty());
    assert_eq!(json["projectInfo"]["Project Name"], "Acme Solar");
}

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();

    helio(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"))
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn test_config_commands_use_config_override() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.json");

    helio(dir.path())
        .arg("--config")
        .arg(&custom)
        .args(["config", "set", "output.pretty_json", "true"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&custom).unwrap()).unwrap();
    assert_eq!(saved["output"]["pretty_json"], true);
    assert!(!dir.path().join(".config/helio/config.json").exists());

    helio(dir.path())
        .arg("--config")
        .arg(&custom)
        .args(["config", "get", "output.pretty_json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    helio(dir.path())
        .args(["config", "path", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"))
        .stdout(predicate::str::contains("exists"));

    let input = write_report(dir.path(), "report.txt");
    helio(dir.path())
        .arg("--config")
        .arg(&custom)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"projectInfo\""));
}
