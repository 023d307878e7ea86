//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags, special};
use super::parser::{ParsedLog, Parser};
use super::template::FormatProfile;

/// Executor for git commands
///
/// Every command runs with the repository as the child's working directory;
/// the current directory of this process is never changed.
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository working tree (or `.git` directory)
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: path.into(),
        }
    }

    /// Repository path this executor runs against
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically adds `--no-pager` so output is never piped through a pager.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        if !self.repo_path.exists() {
            return Err(GitError::RepositoryNotFound(self.repo_path.clone()));
        }

        let mut cmd = Command::new(constants::GIT_COMMAND);
        cmd.current_dir(&self.repo_path)
            .env(special::TERMINAL_PROMPT_ENV, "0")
            .arg(flags::NO_PAGER)
            .args(args);

        tracing::debug!(repo = %self.repo_path.display(), ?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository(self.repo_path.clone()));
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Verify that the path exists and is inside a git repository
    pub fn check_repository(&self) -> Result<(), GitError> {
        self.run(&[commands::REV_PARSE, "--git-dir"]).map(|_| ())
    }

    /// Run `git log` with the given format profile
    ///
    /// A repository without commits yields empty output instead of an error.
    pub fn log_raw(
        &self,
        profile: FormatProfile,
        max_count: Option<usize>,
    ) -> Result<String, GitError> {
        let pretty = format!("{}{}", flags::PRETTY_FORMAT_PREFIX, profile.pretty_format());
        let count = max_count.map(|n| n.to_string());

        let mut args = vec![commands::LOG, flags::NO_COLOR, flags::DATE_SHORT, pretty.as_str()];
        if let Some(ref n) = count {
            args.push(flags::MAX_COUNT);
            args.push(n);
        }

        match self.run(&args) {
            Err(GitError::CommandFailed { stderr, .. })
                if stderr.contains(errors::NO_COMMITS_YET) =>
            {
                Ok(String::new())
            }
            result => result,
        }
    }

    /// Run `git log` and parse the output into commit records
    pub fn log_commits(
        &self,
        profile: FormatProfile,
        max_count: Option<usize>,
    ) -> Result<ParsedLog, GitError> {
        let output = self.log_raw(profile, max_count)?;
        Ok(Parser::parse_log(&output, profile))
    }

    /// Name of the checked-out branch ("HEAD" when detached)
    pub fn current_branch(&self) -> Result<String, GitError> {
        let output = self.run(&[commands::REV_PARSE, flags::ABBREV_REF, special::HEAD])?;
        Ok(output.trim().to_string())
    }

    /// Run `git pull --ff-only`
    ///
    /// Credential prompts are disabled, so a remote requiring interaction fails
    /// with `CommandFailed` instead of blocking the UI.
    pub fn pull(&self) -> Result<String, GitError> {
        self.run(&[commands::PULL, flags::FF_ONLY])
    }
}
