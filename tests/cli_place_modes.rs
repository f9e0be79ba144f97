//! End-to-end placement for the overwrite modes, using --skip-compile so no
//! external bundler is needed.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

const ARTIFACT: &str = "self.addEventListener('install', () => {});";

fn project_with_entry() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("nested").join("sw-entry.js");
    fs::create_dir_all(entry.parent().unwrap()).unwrap();
    fs::write(&entry, ARTIFACT).unwrap();
    (dir, entry)
}

fn swbuild() -> Command {
    Command::new(env!("CARGO_BIN_EXE_swbuild"))
}

#[test]
fn test_dev_mode_writes_public_copy_with_entry_base_name() {
    let (dir, entry) = project_with_entry();
    fs::create_dir(dir.path().join("public")).unwrap();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-m", "dev"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // Directory components of the entry path are stripped.
    let written = dir.path().join("public").join("sw-entry.js");
    assert_eq!(fs::read_to_string(written).unwrap(), ARTIFACT);
}

#[test]
fn test_build_mode_writes_build_copy() {
    let (dir, entry) = project_with_entry();
    fs::create_dir(dir.path().join("build")).unwrap();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-m", "build"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let written = dir.path().join("build").join("sw-entry.js");
    assert_eq!(fs::read_to_string(written).unwrap(), ARTIFACT);
}

#[test]
fn test_replace_mode_overwrites_canonical_service_worker() {
    let (dir, entry) = project_with_entry();
    fs::create_dir(dir.path().join("build")).unwrap();
    let canonical = dir.path().join("build").join("service-worker.js");
    fs::write(&canonical, "// stale content\n").unwrap();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-m", "replace"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&canonical).unwrap(), ARTIFACT);
}

#[test]
fn test_replace_fcm_targets_messaging_worker_only() {
    let (dir, entry) = project_with_entry();
    fs::create_dir(dir.path().join("build")).unwrap();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-m", "replace", "-t", "fcm"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let fcm = dir.path().join("build").join("firebase-messaging-sw.js");
    assert_eq!(fs::read_to_string(fcm).unwrap(), ARTIFACT);
    assert!(!dir.path().join("build").join("service-worker.js").exists());
}

#[test]
fn test_overwrite_modes_are_idempotent() {
    let (dir, entry) = project_with_entry();
    fs::create_dir(dir.path().join("public")).unwrap();

    for _ in 0..2 {
        let output = swbuild()
            .current_dir(dir.path())
            .arg(&entry)
            .args(["-s", "-m", "dev"])
            .output()
            .unwrap();
        assert!(output.status.success());
    }

    let written = dir.path().join("public").join("sw-entry.js");
    assert_eq!(fs::read_to_string(written).unwrap(), ARTIFACT);
}

#[test]
fn test_dev_mode_fails_when_public_dir_is_missing() {
    let (dir, entry) = project_with_entry();

    let output = swbuild()
        .current_dir(dir.path())
        .arg(&entry)
        .args(["-s", "-m", "dev"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("public").exists());
}
