//! Keybinding definitions for gitmon
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Reload the log
pub const REFRESH: KeyCode = KeyCode::Char('r');

/// Pull from upstream and reload
pub const PULL: KeyCode = KeyCode::Char('p');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Filter bar keys
// =============================================================================

/// Select the previous filter button (vim style)
pub const FILTER_PREV: KeyCode = KeyCode::Char('h');

/// Select the previous filter button (arrow key)
pub const FILTER_PREV_ARROW: KeyCode = KeyCode::Left;

/// Select the next filter button (vim style)
pub const FILTER_NEXT: KeyCode = KeyCode::Char('l');

/// Select the next filter button (arrow key)
pub const FILTER_NEXT_ARROW: KeyCode = KeyCode::Right;

/// Clear the filter
pub const FILTER_CLEAR: KeyCode = KeyCode::Char('0');

pub fn is_filter_prev(code: KeyCode) -> bool {
    matches!(code, FILTER_PREV | FILTER_PREV_ARROW)
}

pub fn is_filter_next(code: KeyCode) -> bool {
    matches!(code, FILTER_NEXT | FILTER_NEXT_ARROW)
}

/// Map `1`..`9` to a zero-based filter button index
pub fn filter_button_index(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Hints for the log view
pub const LOG_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "1-9",
        label: "Filter",
        color: Color::Yellow,
    },
    KeyHint {
        key: "h/l",
        label: "Prev/Next filter",
        color: Color::Yellow,
    },
    KeyHint {
        key: "0",
        label: "Clear",
        color: Color::Yellow,
    },
    KeyHint {
        key: "r",
        label: "Reload",
        color: Color::Green,
    },
    KeyHint {
        key: "p",
        label: "Pull",
        color: Color::Green,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];
