//! CLI integration tests using assert_cmd to exercise the actual binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn harscan() -> Command {
    Command::cargo_bin("harscan").unwrap()
}

fn write_har(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("capture.har");
    std::fs::write(&path, contents).unwrap();
    path
}

const EMAIL_IN_URL: &str = r#"{
  "log": {
    "entries": [
      {
        "startedDateTime": "2024-03-01T12:00:00Z",
        "request": { "url": "http://x/?email=a%40b.com", "method": "GET", "headers": [] },
        "response": { "headers": [], "content": {} }
      }
    ]
  }
}"#;

const CLEAN: &str = r#"{
  "log": {
    "entries": [
      {
        "request": { "url": "http://example.com/", "method": "GET", "headers": [] },
        "response": { "headers": [], "content": { "text": "nothing sensitive here" } }
      }
    ]
  }
}"#;

// ---------------------------------------------------------------------------
// Fatal conditions
// ---------------------------------------------------------------------------

#[test]
fn cli_missing_file_fails() {
    harscan()
        .arg("/nonexistent/capture.har")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn cli_invalid_json_fails_with_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_har(&tmp, "this is not a har file");
    harscan()
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse HAR file"));
}

// ---------------------------------------------------------------------------
// Findings output
// ---------------------------------------------------------------------------

#[test]
fn cli_reports_email_in_url() {
    let tmp = TempDir::new().unwrap();
    let path = write_har(&tmp, EMAIL_IN_URL);
    harscan()
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("PII Findings:"))
        .stdout(predicate::str::contains("Email Address"))
        .stdout(predicate::str::contains("a@b.com"))
        .stderr(predicate::str::contains("scanned 1 entries"));
}

#[test]
fn cli_clean_capture_reports_no_pii() {
    let tmp = TempDir::new().unwrap();
    let path = write_har(&tmp, CLEAN);
    harscan()
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No PII found in the HAR file."));
}

#[test]
fn cli_json_output_parses() {
    let tmp = TempDir::new().unwrap();
    let path = write_har(&tmp, EMAIL_IN_URL);
    let output = harscan().arg(path).arg("--json").output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["location"], "URL");
    assert_eq!(parsed[0]["pii_type"], "Email Address");
    assert_eq!(parsed[0]["matched"], "a@b.com");
}

// ---------------------------------------------------------------------------
// Configuration surface
// ---------------------------------------------------------------------------

#[test]
fn cli_custom_field_flag() {
    let tmp = TempDir::new().unwrap();
    let har = r#"{
      "log": {
        "entries": [
          {
            "request": {
              "url": "http://x/submit",
              "method": "POST",
              "headers": [],
              "postData": { "text": "token=123456" }
            },
            "response": { "headers": [] }
          }
        ]
      }
    }"#;
    let path = write_har(&tmp, har);
    harscan()
        .arg(path)
        .arg("--custom-field")
        .arg(r"token:\d{6}")
        .assert()
        .success()
        .stdout(predicate::str::contains("token"))
        .stdout(predicate::str::contains("123456"));
}

#[test]
fn cli_config_file_enables_possible_pii() {
    let tmp = TempDir::new().unwrap();
    let har = r#"{
      "log": {
        "entries": [
          {
            "request": { "url": "http://x/?id=a1b2c3d4-e5f6-a7b8-c9d0-e1f2a3b4c5d6", "method": "GET", "headers": [] },
            "response": { "headers": [] }
          }
        ]
      }
    }"#;
    let har_path = write_har(&tmp, har);
    let config_path = tmp.path().join("scan.yml");
    std::fs::write(&config_path, "include_possible_pii: true\n").unwrap();

    harscan()
        .arg(&har_path)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("GUID"));

    // Without the config the GUID tier stays off
    harscan()
        .arg(&har_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No PII found in the HAR file."));
}

#[test]
fn cli_malformed_custom_field_warns_but_scans() {
    let tmp = TempDir::new().unwrap();
    let path = write_har(&tmp, EMAIL_IN_URL);
    harscan()
        .arg(path)
        .arg("--custom-field")
        .arg("no-separator")
        .assert()
        .success()
        .stdout(predicate::str::contains("Email Address"))
        .stderr(predicate::str::contains("invalid custom field format"));
}

#[test]
fn cli_malformed_entry_warns_but_scans_siblings() {
    let tmp = TempDir::new().unwrap();
    let har = r#"{
      "log": {
        "entries": [
          { "bogus": true },
          {
            "request": { "url": "http://x/?email=a%40b.com", "method": "GET", "headers": [] },
            "response": { "headers": [] }
          }
        ]
      }
    }"#;
    let path = write_har(&tmp, har);
    harscan()
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email Address"))
        .stderr(predicate::str::contains("skipping malformed entry 1"));
}
