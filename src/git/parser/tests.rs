use super::*;
use crate::git::{FormatProfile, GitError};

/// Build a chunk the way `git log` emits it for the short profile
fn short_record(id: &str, date: &str, author: &str, message: &str) -> String {
    format!("{id}\x1f{date}\x1f{author}\x1f{message}{{$$$}}")
}

#[test]
fn test_parse_bracketed_record() {
    let commit =
        Parser::parse_record("abc1234 2024-01-02 [Jane Doe] Fix bug", FormatProfile::Short)
            .unwrap();

    assert_eq!(commit.short_id, "abc1234");
    assert_eq!(commit.date, "2024-01-02");
    assert_eq!(commit.author, "Jane Doe");
    assert_eq!(commit.message, "Fix bug");
    assert!(commit.refs.is_empty());
}

#[test]
fn test_parse_bracketed_record_message_with_brackets() {
    // Only the first `]` closes the author
    let commit = Parser::parse_record(
        "abc1234 2024-01-02 [Jane] [WIP] handle ] in subject",
        FormatProfile::Short,
    )
    .unwrap();

    assert_eq!(commit.author, "Jane");
    assert_eq!(commit.message, "[WIP] handle ] in subject");
}

#[test]
fn test_parse_bracketed_record_empty_message() {
    let commit =
        Parser::parse_record("abc1234 2024-01-02 [Jane Doe]", FormatProfile::Short).unwrap();
    assert_eq!(commit.author, "Jane Doe");
    assert_eq!(commit.message, "");
}

#[test]
fn test_parse_bracketed_record_missing_brackets() {
    let result = Parser::parse_record("abc1234 2024-01-02 Jane Doe Fix bug", FormatProfile::Short);
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_record_too_short() {
    let result = Parser::parse_record("a", FormatProfile::Short);
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_separated_record() {
    let commit = Parser::parse_record(
        "abc1234\x1f2024-01-02\x1fJane Doe\x1fFix bug",
        FormatProfile::Short,
    )
    .unwrap();

    assert_eq!(commit.short_id, "abc1234");
    assert_eq!(commit.date, "2024-01-02");
    assert_eq!(commit.author, "Jane Doe");
    assert_eq!(commit.message, "Fix bug");
}

#[test]
fn test_parse_separated_record_message_keeps_separator() {
    let commit = Parser::parse_record(
        "abc1234\x1f2024-01-02\x1fJane\x1fodd\x1fsubject",
        FormatProfile::Short,
    )
    .unwrap();
    assert_eq!(commit.message, "odd\x1fsubject");
}

#[test]
fn test_parse_separated_record_missing_fields() {
    let result = Parser::parse_record("abc1234\x1f2024-01-02\x1fJane", FormatProfile::Short);
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_separated_record_invalid_id() {
    let result = Parser::parse_record(
        "not-a-hash\x1f2024-01-02\x1fJane\x1fFix",
        FormatProfile::Short,
    );
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_separated_record_invalid_date() {
    let result = Parser::parse_record(
        "abc1234\x1fyesterday\x1fJane\x1fFix",
        FormatProfile::Short,
    );
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_extra_record_with_refs() {
    let commit = Parser::parse_record(
        "abc1234\x1f2024-01-02\x1fJane\x1fHEAD -> main, origin/main, tag: v1.0\x1fRelease",
        FormatProfile::Extra,
    )
    .unwrap();

    assert_eq!(commit.refs, vec!["HEAD -> main", "origin/main", "tag: v1.0"]);
    assert_eq!(commit.message, "Release");
}

#[test]
fn test_parse_extra_record_without_refs() {
    let commit = Parser::parse_record(
        "abc1234\x1f2024-01-02\x1fJane\x1f\x1fPlain commit",
        FormatProfile::Extra,
    )
    .unwrap();

    assert!(commit.refs.is_empty());
    assert_eq!(commit.message, "Plain commit");
}

#[test]
fn test_parse_refs_empty() {
    assert!(Parser::parse_refs("").is_empty());
    assert!(Parser::parse_refs("  ").is_empty());
}

#[test]
fn test_split_records_discards_empty_chunks() {
    let chunks = Parser::split_records("a{$$$} {$$$}");
    assert_eq!(chunks, vec!["a"]);
}

#[test]
fn test_split_records_leading_delimiter_and_whitespace() {
    let chunks = Parser::split_records("{$$$}\n  first \n{$$$}\n\t\n{$$$}second{$$$}\n");
    assert_eq!(chunks, vec!["first", "second"]);
}

#[test]
fn test_split_records_empty_output() {
    assert!(Parser::split_records("").is_empty());
    assert!(Parser::split_records("\n").is_empty());
}

#[test]
fn test_parse_log_preserves_order() {
    let output = [
        short_record("aaaaaaa", "2024-03-01", "Alice", "Third"),
        short_record("bbbbbbb", "2024-02-01", "Bob", "Second"),
        short_record("ccccccc", "2024-01-01", "Alice", "First"),
    ]
    .join("\n");

    let parsed = Parser::parse_log(&output, FormatProfile::Short);
    assert!(parsed.skipped.is_empty());
    let messages: Vec<&str> = parsed.commits.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["Third", "Second", "First"]);
}

#[test]
fn test_parse_log_skips_malformed_chunks() {
    let output = format!(
        "{}\ngarbage line{{$$$}}\n{}",
        short_record("aaaaaaa", "2024-03-01", "Alice", "Good"),
        short_record("bbbbbbb", "2024-02-01", "Bob", "Also good"),
    );

    let parsed = Parser::parse_log(&output, FormatProfile::Short);
    assert_eq!(parsed.commits.len(), 2);
    assert_eq!(parsed.skipped, vec!["garbage line"]);
    assert_eq!(parsed.commits[1].author, "Bob");
}

#[test]
fn test_parse_log_empty_output() {
    let parsed = Parser::parse_log("", FormatProfile::Short);
    assert!(parsed.commits.is_empty());
    assert!(parsed.skipped.is_empty());
}

#[test]
fn test_parse_log_bracketed_layout() {
    let output = "abc1234 2024-01-02 [Jane Doe] Fix bug{$$$}\n\
                  def5678 2024-01-01 [John Roe] Initial commit{$$$}";

    let parsed = Parser::parse_log(output, FormatProfile::Short);
    assert_eq!(parsed.commits.len(), 2);
    assert_eq!(parsed.commits[0].author, "Jane Doe");
    assert_eq!(parsed.commits[1].message, "Initial commit");
}

#[test]
fn test_parse_log_delimiter_inside_subject_splits_entry() {
    // git cannot escape the delimiter, so the subject is cut and its tail skipped
    let output = short_record("aaaaaaa", "2024-03-01", "Alice", "weird {$$$} subject");

    let parsed = Parser::parse_log(&output, FormatProfile::Short);
    assert_eq!(parsed.commits.len(), 1);
    assert_eq!(parsed.commits[0].message, "weird");
    assert_eq!(parsed.skipped, vec!["subject"]);
}
