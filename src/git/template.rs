//! git pretty-format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from `git log`
//! regardless of user configuration.

use serde::Deserialize;

/// Separator used between fields in format output (ASCII unit separator)
pub const FIELD_SEPARATOR: char = '\x1f';

/// Token appended after every commit record
pub const RECORD_DELIMITER: &str = "{$$$}";

/// Named `git log` output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatProfile {
    /// id, date, author, subject
    #[default]
    Short,
    /// id, date, author, ref decorations, subject
    Extra,
}

impl FormatProfile {
    /// Pretty-format string for this profile
    ///
    /// Fields (separated by `%x1f`):
    /// 1. abbreviated commit hash
    /// 2. committer date (`--date=short`)
    /// 3. committer name
    /// 4. ref names without wrapping (extra only)
    /// 5. subject
    ///
    /// The subject is always last so that it may contain anything but the separator.
    pub fn pretty_format(self) -> &'static str {
        match self {
            FormatProfile::Short => concat!("%h", "%x1f", "%cd", "%x1f", "%cn", "%x1f", "%s", "{$$$}"),
            FormatProfile::Extra => concat!(
                "%h", "%x1f", "%cd", "%x1f", "%cn", "%x1f", "%D", "%x1f", "%s", "{$$$}"
            ),
        }
    }

    /// Number of separated fields a record of this profile carries
    pub fn field_count(self) -> usize {
        match self {
            FormatProfile::Short => 4,
            FormatProfile::Extra => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatProfile::Short => "short",
            FormatProfile::Extra => "extra",
        }
    }
}
