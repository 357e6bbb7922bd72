// tests/cli_test.rs
mod common;

use assert_cmd::Command;
use common::{add_change, git, setup_repo};
use predicates::prelude::*;

fn version_saver() -> Command {
    Command::cargo_bin("version-saver").unwrap()
}

#[test]
fn test_help() {
    version_saver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage, commit, tag and push"));
}

#[test]
fn test_version_flag() {
    version_saver()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_suggest_prints_next_version() {
    let repo = setup_repo();
    git(repo.path(), &["tag", "v0.3"]);

    version_saver()
        .args(["--suggest", "--repo"])
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("v0.4\n"));
}

#[test]
fn test_unattended_without_message_fails() {
    let repo = setup_repo();

    version_saver()
        .args(["--yes", "--tag", "v1.0", "--repo"])
        .arg(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Voer een commit-message in"));
}

#[test]
fn test_unattended_without_repo_fails() {
    version_saver()
        .args(["--yes", "--tag", "v1.0", "--message", "msg"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Kies eerst een projectmap"));
}

#[test]
fn test_dry_run_changes_nothing() {
    let repo = setup_repo();
    add_change(repo.path(), "pending.txt");

    version_saver()
        .args(["--yes", "--dry-run", "--message", "try it", "--repo"])
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("git commit -m 'try it'"))
        .stdout(predicate::str::contains("git tag -- v1.0"))
        .stdout(predicate::str::contains("git push --tags"));

    assert_eq!(git(repo.path(), &["tag"]), "");
    assert_eq!(
        git(repo.path(), &["status", "--porcelain"]),
        "?? pending.txt"
    );
}

#[test]
fn test_unattended_push_failure_exits_with_error() {
    let repo = setup_repo();
    add_change(repo.path(), "next.txt");

    version_saver()
        .args(["--yes", "--tag", "v0.9", "--message", "no remote", "--repo"])
        .arg(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Stap mislukt: Code pushen"))
        .stdout(predicate::str::contains("[Nieuwe tag v0.9]"));
}

#[test]
fn test_bad_config_path_fails() {
    version_saver()
        .args(["--config", "/definitely/not/here.toml", "--suggest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading config"));
}
