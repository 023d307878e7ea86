//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the commit table
pub mod log_view {
    use super::*;

    /// Title color
    pub const TITLE: Color = Color::Cyan;
    /// Column header color
    pub const HEADER: Color = Color::Cyan;
    /// Commit id color
    pub const COMMIT_ID: Color = Color::Yellow;
    /// Date color
    pub const DATE: Color = Color::DarkGray;
    /// Author color
    pub const AUTHOR: Color = Color::Green;
    /// Ref decoration color
    pub const REFS: Color = Color::Magenta;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for the filter button bar
pub mod filter_bar {
    use super::*;

    /// Active button background
    pub const ACTIVE_BG: Color = Color::Yellow;
    /// Active button foreground
    pub const ACTIVE_FG: Color = Color::Black;
    /// Inactive button foreground
    pub const INACTIVE_FG: Color = Color::Gray;
}
