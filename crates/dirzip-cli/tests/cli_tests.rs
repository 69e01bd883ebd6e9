//! Integration tests for dirzip-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn dirzip_cmd() -> Command {
    cargo_bin_cmd!("dirzip")
}

/// Creates `project/` under `root` with files at depths 1, 2 and 3.
fn sample_tree(root: &Path) -> PathBuf {
    let project = root.join("project");
    fs::create_dir_all(project.join("sub").join("deep")).unwrap();
    fs::write(project.join("a.txt"), b"alpha").unwrap();
    fs::write(project.join("sub").join("b.txt"), b"beta").unwrap();
    fs::write(project.join("sub").join("deep").join("c.txt"), b"gamma").unwrap();
    project
}

fn find_archives(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "zip"))
        .collect();
    found.sort();
    found
}

fn entry_names(archive: &Path) -> Vec<String> {
    let file = fs::File::open(archive).unwrap();
    let mut zip = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

/// Returns `false` when the process bypasses permission checks (root),
/// which makes chmod-based failure tests meaningless.
#[cfg(unix)]
fn permissions_are_enforced(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let probe = dir.join("probe");
    fs::write(&probe, b"x").unwrap();
    fs::set_permissions(&probe, fs::Permissions::from_mode(0o000)).unwrap();
    let enforced = fs::File::open(&probe).is_err();
    fs::set_permissions(&probe, fs::Permissions::from_mode(0o644)).unwrap();
    fs::remove_file(&probe).unwrap();
    enforced
}

#[test]
fn test_version_flag() {
    dirzip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirzip"));
}

#[test]
fn test_help_flag() {
    dirzip_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_archives_directory_and_reports_progress() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archiving:"))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains(format!(
            "Archive created: {}",
            out.display()
        )))
        .stdout(predicate::str::contains("Elapsed time: 00:"));

    let archives = find_archives(&out);
    assert_eq!(archives.len(), 1);

    let name = archives[0].file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("project_")
        .unwrap()
        .strip_suffix(".zip")
        .unwrap();
    assert_eq!(stamp.len(), 12);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_depth_bound_limits_entries() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("-d")
        .arg("2")
        .assert()
        .success();

    let archives = find_archives(&out);
    assert_eq!(archives.len(), 1);
    assert_eq!(entry_names(&archives[0]), vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_depth_zero_is_rejected_before_any_io() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("nested").join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("-d")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("at least 1"))
        .stdout(predicate::str::is_empty());

    assert!(!out.exists());
}

#[test]
fn test_negative_depth_is_rejected() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-d")
        .arg("-3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR"));
}

#[test]
fn test_missing_source_fails() {
    let temp = TempDir::new().unwrap();

    dirzip_cmd()
        .arg("-p")
        .arg(temp.path().join("does-not-exist"))
        .arg("-o")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_file_source_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, b"not a directory").unwrap();

    dirzip_cmd()
        .arg("-p")
        .arg(&file)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_creates_nested_output_directory() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("a").join("b").join("c");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(find_archives(&out).len(), 1);
}

#[test]
fn test_quiet_suppresses_output() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(find_archives(&out).len(), 1);
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    let assert = dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["operation"], "archive");
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["files_added"], 3);
    let reported = value["data"]["archive_path"].as_str().unwrap();
    assert!(Path::new(reported).exists());
}

#[test]
fn test_json_error_output() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());

    let assert = dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-d")
        .arg("0")
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["status"], "error");
    assert!(value["error"].as_str().unwrap().contains("at least 1"));
}

#[test]
fn test_underscore_output_dir_alias() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("--output_dir")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(find_archives(&out).len(), 1);
}

#[test]
fn test_source_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .current_dir(&project)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let archives = find_archives(&out);
    assert_eq!(archives.len(), 1);
    let name = archives[0].file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("project_"));
}

#[test]
fn test_output_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    dirzip_cmd()
        .current_dir(&out)
        .arg("-p")
        .arg(&project)
        .assert()
        .success();

    assert_eq!(find_archives(&out).len(), 1);
}

#[test]
fn test_verbose_reports_counts() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files archived: 3"))
        .stdout(predicate::str::contains("Total size:"));
}

#[test]
fn test_compression_level_flag_accepted() {
    let temp = TempDir::new().unwrap();
    let project = sample_tree(temp.path());
    let out = temp.path().join("out");

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("-l")
        .arg("1")
        .assert()
        .success();

    let archives = find_archives(&out);
    assert_eq!(archives.len(), 1);
    assert_eq!(entry_names(&archives[0]).len(), 3);
}

#[test]
fn test_completions_bash() {
    dirzip_cmd()
        .arg("--completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirzip"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_source_reports_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    if !permissions_are_enforced(temp.path()) {
        return;
    }

    let project = sample_tree(temp.path());
    let out = temp.path().join("out");
    fs::set_permissions(&project, fs::Permissions::from_mode(0o000)).unwrap();

    dirzip_cmd()
        .arg("-p")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not readable"));

    fs::set_permissions(&project, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(!out.exists() || find_archives(&out).is_empty());
}
