//! git command execution layer
//!
//! This module handles executing git commands and parsing their output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;
pub use parser::{ParsedLog, Parser};
pub use template::{FIELD_SEPARATOR, FormatProfile, RECORD_DELIMITER};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading and parsing git history
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Repository path does not exist: {}", .0.display())]
    RepositoryNotFound(PathBuf),

    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git log entry: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

impl GitError {
    /// True for failures reaching the repository or running git.
    ///
    /// These are fatal at startup; only `ParseError` is recoverable per entry.
    pub fn is_repository_access(&self) -> bool {
        !matches!(self, GitError::ParseError(_))
    }
}
