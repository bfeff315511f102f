//! Integration tests for voskinst-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn voskinst_cmd() -> Command {
    cargo_bin_cmd!("voskinst")
}

/// Writes a small model archive shaped like the ones the Vosk project ships.
fn model_archive(dir: &Path, tag: &str) -> PathBuf {
    let root = format!("vosk-model-small-{tag}-0.22/");
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.add_directory(root.as_str(), options).unwrap();
    zip.start_file(format!("{root}README"), options).unwrap();
    zip.write_all(b"small model").unwrap();
    zip.start_file(format!("{root}conf/model.conf"), options)
        .unwrap();
    zip.write_all(b"--min-active=200").unwrap();

    let path = dir.join(format!("vosk-model-small-{tag}-0.22.zip"));
    std::fs::write(&path, zip.finish().unwrap().into_inner()).unwrap();
    path
}

#[test]
fn test_version_flag() {
    voskinst_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voskinst"));
}

#[test]
fn test_help_flag() {
    voskinst_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_install_help() {
    voskinst_cmd()
        .arg("install")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install a zipped model archive"));
}

#[test]
fn test_install_detects_locale() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = model_archive(temp.path(), "en-us");
    let data = temp.path().join("data");

    voskinst_cmd()
        .arg("--data-dir")
        .arg(&data)
        .arg("install")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale: en-US (detected)"));

    assert!(
        data.join("models/en-US/vosk-model-small-en-us-0.22/conf/model.conf")
            .is_file()
    );
    assert!(!data.join("unzip-staging").exists());
}

#[test]
fn test_install_with_explicit_locale() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = model_archive(temp.path(), "en-us");
    let data = temp.path().join("data");

    voskinst_cmd()
        .arg("-d")
        .arg(&data)
        .arg("install")
        .arg(&archive)
        .arg("--locale")
        .arg("en-GB")
        .assert()
        .success();

    assert!(data.join("models/en-GB/vosk-model-small-en-us-0.22").is_dir());
    assert!(!data.join("models/en-US").exists());
}

#[test]
fn test_install_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = model_archive(temp.path(), "de-de");
    let data = temp.path().join("data");

    let output = voskinst_cmd()
        .arg("--json")
        .arg("--data-dir")
        .arg(&data)
        .arg("install")
        .arg(&archive)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "install");
    assert_eq!(json["data"]["locale"], "de-DE");
    assert_eq!(json["data"]["locale_detected"], true);
    assert_eq!(json["data"]["files_extracted"], 2);
    assert_eq!(json["data"]["merged"], false);
}

#[test]
fn test_install_quiet_prints_nothing() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = model_archive(temp.path(), "fr-fr");

    voskinst_cmd()
        .arg("-q")
        .arg("-d")
        .arg(temp.path())
        .arg("install")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_install_rejects_invalid_locale() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = model_archive(temp.path(), "en-us");

    voskinst_cmd()
        .arg("install")
        .arg(&archive)
        .arg("--locale")
        .arg("not a tag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid language tag"));
}

#[test]
fn test_install_corrupt_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("broken.zip");
    std::fs::write(&archive, b"this is not a zip file").unwrap();

    voskinst_cmd()
        .arg("-d")
        .arg(temp.path())
        .arg("install")
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid archive"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_install_nonexistent_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");

    voskinst_cmd()
        .arg("-d")
        .arg(temp.path())
        .arg("install")
        .arg(temp.path().join("missing.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open archive"));
}

#[test]
fn test_install_json_error() {
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = voskinst_cmd()
        .arg("--json")
        .arg("-d")
        .arg(temp.path())
        .arg("install")
        .arg(temp.path().join("missing.zip"))
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["operation"], "install");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("missing.zip"));
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().expect("failed to create temp dir");

    voskinst_cmd()
        .arg("-d")
        .arg(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No models installed"));
}

#[test]
fn test_list_after_installs() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data = temp.path().join("data");
    for tag in ["fr-fr", "en-us"] {
        voskinst_cmd()
            .arg("-q")
            .arg("-d")
            .arg(&data)
            .arg("install")
            .arg(model_archive(temp.path(), tag))
            .assert()
            .success();
    }

    let output = voskinst_cmd()
        .arg("--json")
        .arg("-d")
        .arg(&data)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    let models = json["data"]["models"].as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["locale"], "en-US");
    assert_eq!(models[0]["name"], "vosk-model-small-en-us-0.22");
    assert_eq!(models[1]["locale"], "fr-FR");
}

#[test]
fn test_remove_model() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data = temp.path().join("data");
    voskinst_cmd()
        .arg("-q")
        .arg("-d")
        .arg(&data)
        .arg("install")
        .arg(model_archive(temp.path(), "en-us"))
        .assert()
        .success();

    voskinst_cmd()
        .arg("-d")
        .arg(&data)
        .arg("remove")
        .arg("en-US")
        .arg("vosk-model-small-en-us-0.22")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed vosk-model-small-en-us-0.22"));

    assert!(!data.join("models/en-US").exists());
}

#[test]
fn test_remove_missing_model() {
    let temp = TempDir::new().expect("failed to create temp dir");

    voskinst_cmd()
        .arg("-d")
        .arg(temp.path())
        .arg("remove")
        .arg("en-US")
        .arg("nothing-here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No model installed"))
        .stderr(predicate::str::contains("voskinst list"));
}

#[test]
fn test_remove_parent_name_leaves_models_alone() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data = temp.path().join("data");
    for tag in ["en-us", "de-de"] {
        voskinst_cmd()
            .arg("-q")
            .arg("-d")
            .arg(&data)
            .arg("install")
            .arg(model_archive(temp.path(), tag))
            .assert()
            .success();
    }

    for name in ["..", "../de-DE", "."] {
        voskinst_cmd()
            .arg("-d")
            .arg(&data)
            .arg("remove")
            .arg("en-US")
            .arg(name)
            .assert()
            .failure()
            .stderr(predicate::str::contains("No model installed"));
    }

    assert!(data.join("models/en-US/vosk-model-small-en-us-0.22/README").is_file());
    assert!(data.join("models/de-DE/vosk-model-small-de-de-0.22/README").is_file());
}

#[test]
fn test_remove_json_error_names_operation() {
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = voskinst_cmd()
        .arg("--json")
        .arg("-d")
        .arg(temp.path())
        .arg("remove")
        .arg("en-US")
        .arg("nothing-here")
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["operation"], "remove");
    assert_eq!(json["status"], "error");
}

#[test]
fn test_completion_bash() {
    voskinst_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("voskinst"));
}
