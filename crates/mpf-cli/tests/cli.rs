use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::{json, Value};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("mpf").unwrap()
}

fn write_personality(dir: &TempDir, name: &str, doc: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
    path
}

fn valid_personality() -> Value {
    json!({
        "schema_version": "1.0",
        "name": "Aster",
        "persona": {
            "tone": "playful",
            "traits": ["curious", "patient"]
        }
    })
}

#[test]
fn valid_file_prints_ok() {
    let tmp = TempDir::new().unwrap();
    let path = write_personality(&tmp, "aster.json", &valid_personality());

    cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("[mpf] OK"))
        .stdout(contains("aster.json"));
}

#[test]
fn missing_file_fails_without_loading() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("does-not-exist.json");

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("[mpf] Error: file not found"))
        .stderr(contains("does-not-exist.json"));
}

#[test]
fn invalid_json_fails_with_parse_message() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{ this is not json").unwrap();

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("[mpf] Validation failed:"))
        .stderr(contains("invalid JSON"));
}

#[test]
fn version_mismatch_names_both_versions() {
    let tmp = TempDir::new().unwrap();
    let mut doc = valid_personality();
    doc["schema_version"] = json!("0.9");
    let path = write_personality(&tmp, "old.json", &doc);

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unexpected schema_version"))
        .stderr(contains("0.9"))
        .stderr(contains("1.0"));
}

#[test]
fn missing_version_field_reports_none() {
    let tmp = TempDir::new().unwrap();
    let mut doc = valid_personality();
    doc.as_object_mut().unwrap().remove("schema_version");
    let path = write_personality(&tmp, "unversioned.json", &doc);

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("(none)"))
        .stderr(contains("1.0"));
}

#[test]
fn schema_violation_identifies_constraint() {
    let tmp = TempDir::new().unwrap();
    let mut doc = valid_personality();
    doc.as_object_mut().unwrap().remove("persona");
    let path = write_personality(&tmp, "no-persona.json", &doc);

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not conform"))
        .stderr(contains("persona"));
}

#[test]
fn schema_violation_reports_instance_path() {
    let tmp = TempDir::new().unwrap();
    let mut doc = valid_personality();
    doc["persona"]["tone"] = json!("grumpy");
    let path = write_personality(&tmp, "grumpy.json", &doc);

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("/persona/tone"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    cmd().assert().failure().stderr(contains("Usage"));
}
