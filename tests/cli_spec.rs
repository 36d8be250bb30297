//! Binary integration tests.
//!
//! These spawn the `emulator-config` executable against a temporary config
//! directory and check exit status and files on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn run(config_dir: &Path, vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_emulator-config"))
        .env_clear()
        .arg("--config-dir")
        .arg(config_dir)
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to run emulator-config")
}

fn manifest(config_dir: &Path) -> Value {
    let content = fs::read_to_string(config_dir.join("firebase.json")).expect("Missing manifest");
    serde_json::from_str(&content).expect("Manifest is not valid JSON")
}

#[test]
fn generates_config_and_exits_zero() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run(
        dir.path(),
        &[("FIRESTORE_EMULATOR_PORT", "1234"), ("UI_ENABLED", "false")],
    );

    assert!(output.status.success());
    for file in ["storage.rules", "firestore.rules", "database.rules.json", "firebase.json"] {
        assert!(dir.path().join(file).is_file(), "{} missing", file);
    }

    let manifest = manifest(dir.path());
    assert_eq!(manifest["emulators"]["firestore"]["port"], 1234);
    assert_eq!(manifest["emulators"]["ui"]["enabled"], false);
    assert_eq!(manifest["emulators"]["auth"]["host"], "0.0.0.0");
}

#[test]
fn logs_existing_manifest_and_exits_zero() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("firebase.json"), r#"{"foo": 1}"#).expect("Failed to seed manifest");

    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using existing Firebase configuration"));
    assert!(stdout.contains("\"foo\": 1"));
    assert!(!dir.path().join("storage.rules").exists());
}

#[test]
fn invalid_manifest_exits_nonzero_without_writes() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("firebase.json"), "not json").expect("Failed to seed manifest");

    let output = run(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unreadable"));
    assert_eq!(
        fs::read_to_string(dir.path().join("firebase.json")).expect("Missing manifest"),
        "not json"
    );
    assert!(!dir.path().join("storage.rules").exists());
}

#[test]
fn missing_config_dir_exits_nonzero() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run(&dir.path().join("missing"), &[]);

    assert!(!output.status.success());
}

#[test]
fn second_run_leaves_manifest_untouched() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    assert!(run(dir.path(), &[("UI_EMULATOR_PORT", "4100")]).status.success());
    let first = fs::read_to_string(dir.path().join("firebase.json")).expect("Missing manifest");

    assert!(run(dir.path(), &[("UI_EMULATOR_PORT", "4200")]).status.success());
    let second = fs::read_to_string(dir.path().join("firebase.json")).expect("Missing manifest");

    assert_eq!(first, second);
    assert_eq!(manifest(dir.path())["emulators"]["ui"]["port"], 4100);
}
