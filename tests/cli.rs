//! End-to-end tests for the canopy binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn canopy() -> Command {
    Command::cargo_bin("canopy").unwrap()
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    std::fs::write(dir.path().join("README.md"), "# readme").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "0123456789").unwrap();
    dir
}

#[test]
fn prints_tree_and_summary() {
    let dir = sample_tree();
    canopy()
        .arg(dir.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("├── src/"))
        .stdout(predicate::str::contains("│   └── main.rs"))
        .stdout(predicate::str::contains("├── notes.txt"))
        .stdout(predicate::str::contains("└── README.md"))
        .stdout(predicate::str::contains("Total files:       3"))
        .stdout(predicate::str::contains("Total directories: 1"));
}

#[test]
fn directories_sort_before_files() {
    let dir = sample_tree();
    let output = canopy()
        .arg(dir.path())
        .args(["--color", "never"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let src_pos = stdout.find("src/").unwrap();
    let readme_pos = stdout.find("README.md").unwrap();
    assert!(src_pos < readme_pos);
}

#[test]
fn exclusion_removes_subtree() {
    let dir = sample_tree();
    canopy()
        .arg(dir.path())
        .args(["--color", "never", "-x", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/").not())
        .stdout(predicate::str::contains("main.rs").not())
        .stdout(predicate::str::contains("Total directories: 0"));
}

#[test]
fn extension_filter_limits_files() {
    let dir = sample_tree();
    canopy()
        .arg(dir.path())
        .args(["--color", "never", "-e", ".md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("notes.txt").not())
        // Directories are never dropped by the extension filter.
        .stdout(predicate::str::contains("src/"));
}

#[test]
fn invalid_exclusion_fails_fast() {
    let dir = sample_tree();
    canopy()
        .arg(dir.path())
        .args(["-x", "src/*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("glob metacharacters"));
}

#[test]
fn missing_root_fails() {
    canopy()
        .arg("/definitely/not/a/real/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn json_summary_output() {
    let dir = sample_tree();
    let output = canopy().arg(dir.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_files"], 3);
    assert_eq!(summary["total_dirs"], 1);
    assert_eq!(summary["total_size"], "30 bytes");
}

#[test]
fn text_export_writes_report_file() {
    let dir = sample_tree();
    let out = dir.path().join("report.txt");
    canopy()
        .arg(dir.path())
        .args(["-o", "text", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory tree exported to:"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Directory tree for: "));
    assert!(content.contains("SUMMARY:"));
    assert!(content.contains("DIRECTORY TREE:\n.\n"));
    assert!(content.contains("README.md"));
}

#[test]
fn html_export_writes_report_file() {
    let dir = sample_tree();
    let out = dir.path().join("report.html");
    canopy()
        .arg(dir.path())
        .args(["-o", "html", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML report generated at:"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("class=\"folder\""));
    assert!(content.contains("class=\"file\""));
    assert!(content.contains("<strong>Total Files:</strong> 3"));
}

#[test]
fn metadata_flag_annotates_lines() {
    let dir = sample_tree();
    canopy()
        .arg(dir.path())
        .args(["--color", "never", "-m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt [10 bytes, modified: "));
}

#[cfg(unix)]
#[test]
fn symlink_loop_is_reported_once() {
    let dir = sample_tree();
    std::os::unix::fs::symlink(".", dir.path().join("loop")).unwrap();

    let output = canopy()
        .arg(dir.path())
        .args(["--color", "never", "--follow-symlinks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("[symlink loop detected]").count(), 1);
}
