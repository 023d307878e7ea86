//! Log output parser (git log)

use super::super::GitError;
use super::super::template::{FIELD_SEPARATOR, FormatProfile, RECORD_DELIMITER};
use super::{BRACKETED_RECORD_REGEX, ParsedLog, Parser, SHORT_DATE_REGEX, SHORT_ID_REGEX};
use crate::model::CommitRecord;

/// Separator `%D` places between ref names
const REF_SEPARATOR: &str = ", ";

impl Parser {
    /// Split raw `git log` output into per-commit chunks
    ///
    /// Chunks are trimmed; empty ones (e.g. after the trailing delimiter) are dropped.
    /// A subject containing the delimiter itself is cut there, and its tail comes
    /// back as a separate (malformed) chunk.
    pub fn split_records(output: &str) -> Vec<&str> {
        output
            .split(RECORD_DELIMITER)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .collect()
    }

    /// Parse `git log` output into commit records
    ///
    /// Malformed chunks are logged and collected in [`ParsedLog::skipped`]
    /// instead of aborting the whole block.
    pub fn parse_log(output: &str, profile: FormatProfile) -> ParsedLog {
        let mut parsed = ParsedLog::default();

        for chunk in Self::split_records(output) {
            match Self::parse_record(chunk, profile) {
                Ok(commit) => parsed.commits.push(commit),
                Err(e) => {
                    tracing::warn!(entry = %chunk, error = %e, "skipping malformed log entry");
                    parsed.skipped.push(chunk.to_string());
                }
            }
        }

        parsed
    }

    /// Parse one trimmed chunk into a [`CommitRecord`]
    ///
    /// Separator presence determines the layout:
    /// - With `\x1f`: fields emitted by [`FormatProfile::pretty_format`]
    /// - Without: the bracketed `<id> <date> [<author>] <message>` layout
    pub fn parse_record(chunk: &str, profile: FormatProfile) -> Result<CommitRecord, GitError> {
        let commit = if chunk.contains(FIELD_SEPARATOR) {
            Self::parse_separated_record(chunk, profile)?
        } else {
            Self::parse_bracketed_record(chunk)?
        };

        Self::validate_record(&commit, chunk)?;
        Ok(commit)
    }

    fn parse_separated_record(
        chunk: &str,
        profile: FormatProfile,
    ) -> Result<CommitRecord, GitError> {
        let fields: Vec<&str> = chunk.splitn(profile.field_count(), FIELD_SEPARATOR).collect();

        if fields.len() < profile.field_count() {
            return Err(GitError::ParseError(format!(
                "Expected {} fields for the {} profile, got {}: {:?}",
                profile.field_count(),
                profile.name(),
                fields.len(),
                chunk
            )));
        }

        let (refs, message) = match profile {
            FormatProfile::Short => (Vec::new(), fields[3]),
            FormatProfile::Extra => (Self::parse_refs(fields[3]), fields[4]),
        };

        Ok(CommitRecord {
            short_id: fields[0].trim().to_string(),
            date: fields[1].trim().to_string(),
            author: fields[2].trim().to_string(),
            message: message.trim().to_string(),
            refs,
        })
    }

    fn parse_bracketed_record(chunk: &str) -> Result<CommitRecord, GitError> {
        let caps = BRACKETED_RECORD_REGEX.captures(chunk).ok_or_else(|| {
            GitError::ParseError(format!(
                "Expected `<id> <date> [<author>] <message>`: {:?}",
                chunk
            ))
        })?;

        Ok(CommitRecord {
            short_id: caps[1].to_string(),
            date: caps[2].to_string(),
            author: caps[3].trim().to_string(),
            message: caps
                .get(4)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            refs: Vec::new(),
        })
    }

    /// Parse `%D` output ("HEAD -> main, tag: v1.0") into ref names
    pub(super) fn parse_refs(field: &str) -> Vec<String> {
        field
            .split(REF_SEPARATOR)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn validate_record(commit: &CommitRecord, chunk: &str) -> Result<(), GitError> {
        if !SHORT_ID_REGEX.is_match(&commit.short_id) {
            return Err(GitError::ParseError(format!(
                "Invalid commit id {:?} in {:?}",
                commit.short_id, chunk
            )));
        }

        if !SHORT_DATE_REGEX.is_match(&commit.date) {
            return Err(GitError::ParseError(format!(
                "Invalid date {:?} in {:?}",
                commit.date, chunk
            )));
        }

        Ok(())
    }
}
