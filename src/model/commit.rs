//! Commit data model

use std::fmt;

/// Represents one git commit as shown in the log table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRecord {
    /// Abbreviated commit hash
    pub short_id: String,

    /// Committer date (YYYY-MM-DD)
    pub date: String,

    /// Committer name
    pub author: String,

    /// Subject line
    pub message: String,

    /// Ref decorations (branches, tags); only filled by the extra profile
    pub refs: Vec<String>,
}

impl CommitRecord {
    /// The four displayed columns: ID, Date, Author, Message
    pub fn as_row(&self) -> [&str; 4] {
        [&self.short_id, &self.date, &self.author, &self.message]
    }

    /// Get a display string for the message
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            "(no message)"
        } else {
            &self.message
        }
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.short_id, self.date, self.author, self.message
        )
    }
}
