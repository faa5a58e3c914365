// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn git_commit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-commit").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write_message(dir: &TempDir, message: &str) -> String {
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(&path, message).unwrap();
    path.display().to_string()
}

#[test]
fn lint_accepts_conventional_message() {
    let dir = TempDir::new().unwrap();
    let path = write_message(&dir, "feat(parser): accept empty input\n");

    git_commit(dir.path())
        .args(["lint", &path])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn lint_rejects_unstructured_message() {
    let dir = TempDir::new().unwrap();
    let path = write_message(&dir, "accept empty input\n");

    git_commit(dir.path())
        .args(["lint", &path])
        .assert()
        .failure()
        .stdout(predicate::str::contains("did not pass validation"))
        .stdout(predicate::str::contains("<type>(<scope>): <subject>"));
}

#[test]
fn lint_reports_missing_file() {
    let dir = TempDir::new().unwrap();

    git_commit(dir.path())
        .args(["lint", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn lint_reports_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = write_message(&dir, "");

    git_commit(dir.path())
        .args(["lint", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no commit message content"));
}

#[test]
fn lint_uses_working_directory_config() {
    let dir = TempDir::new().unwrap();
    let path = write_message(&dir, "This is a commit message.\n");

    git_commit(dir.path()).args(["lint", &path]).assert().failure();

    fs::write(dir.path().join(".git-commit.yml"), "enabled: false\n").unwrap();
    git_commit(dir.path()).args(["lint", &path]).assert().success();
}

#[test]
fn lint_with_explicit_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rule.yml");
    fs::write(
        &config,
        "ignores-hash-anchored-lines: true\nignores-trailing-new-lines: true\n",
    )
    .unwrap();
    let path = write_message(
        &dir,
        "fix: handle empty input\n\n# Please enter the commit message\n\n",
    );

    git_commit(dir.path()).args(["lint", &path]).assert().failure();
    git_commit(dir.path())
        .args(["lint", &path, "--config", config.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn lint_surfaces_invalid_types_as_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".git-commit.yml"), "types:\n  - \"feat(\"\n").unwrap();
    let path = write_message(&dir, "feat: add parser\n");

    git_commit(dir.path())
        .args(["lint", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pattern error"));
}

#[test]
fn lint_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_message(&dir, "docs: describe configuration\n");

    git_commit(dir.path())
        .args(["lint", &path, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"));
}

#[test]
fn lint_verbose_output() {
    let dir = TempDir::new().unwrap();
    let path = write_message(&dir, "docs: describe configuration\n");

    git_commit(dir.path())
        .args(["lint", &path, "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed"));
}

#[test]
fn init_installs_hook_and_config() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();

    git_commit(dir.path()).arg("init").assert().success();

    let hook = fs::read_to_string(dir.path().join(".git/hooks/commit-msg")).unwrap();
    assert!(hook.contains("git-commit lint"));
    let config = fs::read_to_string(dir.path().join(".git-commit.yml")).unwrap();
    assert!(config.contains("enabled: true"));

    git_commit(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already installed"));

    git_commit(dir.path()).arg("uninstall").assert().success();
    assert!(!dir.path().join(".git/hooks/commit-msg").exists());
}

#[test]
fn init_from_subdirectory_writes_config_at_worktree_root() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    let nested = dir.path().join("src");
    fs::create_dir_all(&nested).unwrap();

    git_commit(&nested).arg("init").assert().success();

    assert!(dir.path().join(".git/hooks/commit-msg").exists());
    assert!(dir.path().join(".git-commit.yml").exists());
    assert!(!nested.join(".git-commit.yml").exists());

    // The hook lints from the worktree root, so the rule written there applies.
    fs::write(dir.path().join(".git-commit.yml"), "enabled: false\n").unwrap();
    let path = write_message(&dir, "This is a commit message.\n");
    git_commit(dir.path()).args(["lint", &path]).assert().success();
}

#[test]
fn uninstall_without_hook_reports_nothing_to_remove() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();

    git_commit(dir.path())
        .arg("uninstall")
        .assert()
        .success()
        .stdout(predicate::str::contains("No commit-msg hook"));
}

#[test]
fn version_command() {
    let dir = TempDir::new().unwrap();

    git_commit(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
