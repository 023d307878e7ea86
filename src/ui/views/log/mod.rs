//! Log View - displays the commit table and the filter bar
//!
//! The only view of gitmon. Rows are recomputed from the commit list and the
//! selected filter whenever either changes; nothing else is cached.

mod input;
mod render;

use ratatui::layout::{Position, Rect};

use crate::model::{CommitFilter, CommitRecord, filter};

/// Height of the filter bar (one row of buttons plus borders)
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Actions that LogView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogAction {
    /// No action needed
    None,
    /// The filter changed to the given value
    FilterChanged(CommitFilter),
}

/// Log View state
#[derive(Debug, Default)]
pub struct LogView {
    /// All commits from the last load, in `git log` order
    pub commits: Vec<CommitRecord>,
    /// Currently selected filter
    pub filter: CommitFilter,
    /// Filter button labels, in display order
    pub filter_labels: Vec<String>,
    /// Branch name shown in the title
    pub branch: Option<String>,
    /// Repository name shown in the title
    pub repo_name: String,
    /// Currently selected index in `commits`
    pub selected_index: usize,
    /// First visible row (position in `visible_indices`)
    pub scroll_offset: usize,
    /// Indices of commits passing the filter
    visible_indices: Vec<usize>,
    /// Current position in `visible_indices`
    selection_cursor: usize,
    /// Screen areas of the filter buttons from the last render
    button_areas: Vec<Rect>,
}

impl LogView {
    /// Create a new LogView with the given filter button labels
    pub fn new(filter_labels: Vec<String>) -> Self {
        Self {
            filter_labels,
            ..Self::default()
        }
    }

    /// Set the commits to display
    ///
    /// Keeps the current filter and resets selection to the first visible commit.
    pub fn set_commits(&mut self, commits: Vec<CommitRecord>) {
        self.commits = commits;
        self.refilter();
    }

    /// Replace the filter and recompute visible rows
    pub fn set_filter(&mut self, filter: CommitFilter) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible_indices = filter::visible_indices(&self.commits, &self.filter);
        self.scroll_offset = 0;
        self.move_to_top();
    }

    /// Commits passing the filter, in order
    pub fn visible_commits(&self) -> impl Iterator<Item = &CommitRecord> {
        self.visible_indices.iter().map(|&i| &self.commits[i])
    }

    /// Number of rows shown
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Get the currently selected commit
    pub fn selected_commit(&self) -> Option<&CommitRecord> {
        if self.visible_indices.is_empty() {
            return None;
        }
        self.commits.get(self.selected_index)
    }

    /// Index of the button matching the current filter
    pub fn active_button(&self) -> Option<usize> {
        let label = self.filter.label();
        self.filter_labels.iter().position(|l| l == label)
    }

    /// Select the filter of the button at `index`
    ///
    /// Returns the new filter, or `None` when no such button exists.
    pub fn select_button(&mut self, index: usize) -> Option<CommitFilter> {
        let label = self.filter_labels.get(index)?;
        let filter = CommitFilter::from_label(label);
        self.set_filter(filter.clone());
        Some(filter)
    }

    /// Select the next (or previous) button, wrapping around
    pub fn cycle_filter(&mut self, forward: bool) -> Option<CommitFilter> {
        let count = self.filter_labels.len();
        if count == 0 {
            return None;
        }

        let next = match (self.active_button(), forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        self.select_button(next)
    }

    /// Button under a screen position (from the last render)
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.button_areas
            .iter()
            .position(|area| area.contains(position))
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selection_cursor > 0 {
            self.selection_cursor -= 1;
            self.selected_index = self.visible_indices[self.selection_cursor];
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selection_cursor < self.visible_indices.len().saturating_sub(1) {
            self.selection_cursor += 1;
            self.selected_index = self.visible_indices[self.selection_cursor];
        }
    }

    /// Move to top (first visible commit)
    pub fn move_to_top(&mut self) {
        self.selection_cursor = 0;
        self.selected_index = self.visible_indices.first().copied().unwrap_or(0);
    }

    /// Move to bottom (last visible commit)
    pub fn move_to_bottom(&mut self) {
        if let Some(&last) = self.visible_indices.last() {
            self.selection_cursor = self.visible_indices.len() - 1;
            self.selected_index = last;
        }
    }
}
