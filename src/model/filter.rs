//! Commit filtering
//!
//! The filter compares the author field against the selected button label.
//! Buttons carry arbitrary labels from configuration; the default set names
//! programming languages, which never match an author unless configured to.

use crate::model::CommitRecord;

/// Label of the button that clears the filter
pub const NO_FILTER_LABEL: &str = "None";

/// Currently selected filter value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommitFilter {
    /// Every commit is visible
    #[default]
    All,
    /// Only commits whose author equals the value exactly
    Author(String),
}

impl CommitFilter {
    /// Build a filter from a button label
    ///
    /// The `None` label and the empty string map to [`CommitFilter::All`].
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == NO_FILTER_LABEL {
            CommitFilter::All
        } else {
            CommitFilter::Author(label.to_string())
        }
    }

    /// Label of the button that selects this filter
    pub fn label(&self) -> &str {
        match self {
            CommitFilter::All => NO_FILTER_LABEL,
            CommitFilter::Author(value) => value,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, CommitFilter::All)
    }

    /// Row visibility predicate (case-sensitive)
    pub fn matches(&self, commit: &CommitRecord) -> bool {
        match self {
            CommitFilter::All => true,
            CommitFilter::Author(value) => commit.author == *value,
        }
    }
}

/// Lazily yield `(index, commit)` pairs visible under `filter`, in order
pub fn visible_commits<'c, 'f>(
    commits: &'c [CommitRecord],
    filter: &'f CommitFilter,
) -> impl Iterator<Item = (usize, &'c CommitRecord)> + use<'c, 'f> {
    commits
        .iter()
        .enumerate()
        .filter(move |(_, commit)| filter.matches(commit))
}

/// Indices into `commits` of the rows visible under `filter`
pub fn visible_indices(commits: &[CommitRecord], filter: &CommitFilter) -> Vec<usize> {
    visible_commits(commits, filter).map(|(i, _)| i).collect()
}
