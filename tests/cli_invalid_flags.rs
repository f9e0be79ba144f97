//! Invalid --mode/--type values fail fast, before any output is produced.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn swbuild() -> Command {
    Command::new(env!("CARGO_BIN_EXE_swbuild"))
}

#[test]
fn test_unrecognized_mode_fails_without_touching_files() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("sw-entry.js");
    fs::write(&entry, "x").unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-m", "foo"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mode"), "stderr: {stderr}");
    assert!(stderr.contains("'foo'"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(dir.path().join("build")).unwrap().count(), 0);
}

#[test]
fn test_unrecognized_type_fails_without_touching_files() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("sw-entry.js");
    fs::write(&entry, "x").unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-t", "bar"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("type"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(dir.path().join("build")).unwrap().count(), 0);
}

#[test]
fn test_help_documents_every_flag() {
    let output = swbuild().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--skip-compile", "--env", "--type", "--mode"] {
        assert!(stdout.contains(flag), "help should mention {flag}:\n{stdout}");
    }
}
