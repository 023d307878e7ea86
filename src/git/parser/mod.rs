//! git output parser
//!
//! Parses the output from git commands into structured data.

mod log;

#[cfg(test)]
mod tests;

use regex::Regex;
use std::sync::LazyLock;

use crate::model::CommitRecord;

/// Abbreviated commit hash as printed by `%h`
static SHORT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{4,40}$").expect("Invalid short id regex"));

/// Date as printed by `--date=short`
static SHORT_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid short date regex"));

/// Regex for the human-readable bracketed layout
/// Format: `<short_id> <date> [<author>] <message>`
/// Example: `abc1234 2024-01-02 [Jane Doe] Fix bug`
///
/// Groups:
/// 1. short_id (first token)
/// 2. date (second token)
/// 3. author (up to the first `]`)
/// 4. message (everything after `] `, optional)
static BRACKETED_RECORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\S+)\s+(\S+)\s+\[([^\]]*)\](?:\s(.*))?$")
        .expect("Invalid bracketed record regex")
});

/// Result of parsing a whole `git log` output block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Successfully parsed records, in emission order
    pub commits: Vec<CommitRecord>,
    /// Chunks that did not match the expected shape
    pub skipped: Vec<String>,
}

/// Parser for git command output
pub struct Parser;
