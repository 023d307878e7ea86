//! UI symbols and fixed labels

/// Column titles of the commit table
pub const COLUMN_TITLES: [&str; 4] = ["ID", "Date", "Author", "Message"];

/// Empty state texts
pub mod empty {
    /// Repository has no commits
    pub const NO_COMMITS: &str = "No commits found.";
    /// Hint when the repository is empty
    pub const NO_COMMITS_HINT: &str = "Hint: press 'r' to reload or 'p' to pull";
    /// Filter hides every commit
    pub const NO_MATCHES: &str = "No commits match the selected filter.";
    /// Hint when the filter hides everything
    pub const NO_MATCHES_HINT: &str = "Hint: press '0' to show all commits";
}

/// Title of the filter bar
pub const FILTER_BAR_TITLE: &str = " Filter by author ";
