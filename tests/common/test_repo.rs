//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with deterministic identities and dates.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Default date for commits created with [`TestRepo::commit`]
pub const DEFAULT_DATE: &str = "2024-01-02";

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    _dir: TempDir,
    root: PathBuf,
    counter: Cell<usize>,
}

impl TestRepo {
    /// Create a new git repository (branch `main`) in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self {
            root: dir.path().to_path_buf(),
            _dir: dir,
            counter: Cell::new(0),
        };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "tag.gpgsign", "false"]);

        repo
    }

    /// Clone `origin` into a new temporary directory.
    pub fn clone_from(origin: &TestRepo) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let origin_path = origin.path().display().to_string();
        run_git(dir.path(), &["clone", "-q", &origin_path, "clone"]);

        let repo = Self {
            root: dir.path().join("clone"),
            _dir: dir,
            // Keeps file names apart from the ones already in the origin
            counter: Cell::new(1000),
        };
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.root.clone()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.path(), args)
    }

    /// Create a commit on `date` (YYYY-MM-DD) with the given committer name
    pub fn commit_at(&self, author: &str, message: &str, date: &str) {
        let n = self.counter.get() + 1;
        self.counter.set(n);

        let file = format!("file{}.txt", n);
        std::fs::write(self.path().join(&file), format!("change {}\n", n))
            .expect("Failed to write file");
        self.git(&["add", &file]);

        let timestamp = format!("{}T12:00:{:02}+0000", date, n % 60);
        let output = Command::new("git")
            .args(["commit", "-q", "-m", message])
            .current_dir(self.path())
            .env("GIT_AUTHOR_NAME", author)
            .env("GIT_AUTHOR_EMAIL", "author@example.com")
            .env("GIT_COMMITTER_NAME", author)
            .env("GIT_COMMITTER_EMAIL", "author@example.com")
            .env("GIT_AUTHOR_DATE", &timestamp)
            .env("GIT_COMMITTER_DATE", &timestamp)
            .output()
            .expect("Failed to execute git commit");

        if !output.status.success() {
            panic!(
                "git commit failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
    }

    /// Create a commit on [`DEFAULT_DATE`]
    pub fn commit(&self, author: &str, message: &str) {
        self.commit_at(author, message, DEFAULT_DATE);
    }

    /// Abbreviated hash of a revision, as `git log` prints it
    pub fn short_id(&self, rev: &str) -> String {
        self.git(&["log", "-1", "--pretty=format:%h", rev])
            .trim()
            .to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git command");

    if !output.status.success() {
        panic!(
            "git {:?} failed with exit code {:?}:\n{}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}
