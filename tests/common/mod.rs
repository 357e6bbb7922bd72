#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, panicking on failure, and return trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A fresh repository with a configured user and one commit.
pub fn setup_repo() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    git(dir.path(), &["init"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    git(dir.path(), &["config", "tag.gpgsign", "false"]);

    fs::write(dir.path().join("README.md"), "# project\n").unwrap();
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "-m", "initial"]);
    dir
}

/// A repository whose current branch tracks a branch on a local bare remote.
///
/// Returns `(work, remote)`.
pub fn setup_repo_with_remote() -> (TempDir, TempDir) {
    let remote = TempDir::new().expect("Failed to create temp directory");
    git(remote.path(), &["init", "--bare"]);

    let work = setup_repo();
    let remote_path = remote.path().to_str().unwrap();
    git(work.path(), &["remote", "add", "origin", remote_path]);
    git(work.path(), &["push", "-u", "origin", "HEAD"]);

    (work, remote)
}

/// Leave a new file in the working copy so there is something to commit.
pub fn add_change(dir: &Path, name: &str) {
    fs::write(dir.join(name), format!("content of {}\n", name)).unwrap();
}
