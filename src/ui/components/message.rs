//! Error and notification message components
//!
//! Provides consistent styling for error messages and notifications.
//! For empty states, use `empty_state` module.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Separator placed between the view title and a notification
const TITLE_SEPARATOR: &str = " | ";

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for title bar display
///
/// With `max_width`, a message that does not fit is cut and ends with "…".
/// Returns an empty line when not even one character of the message fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    let fixed_width = TITLE_SEPARATOR.len() + label.len() + 1;
    let message_width = notification.message.chars().count() + 1;

    let message = match max_width {
        Some(max) if fixed_width + message_width > max => {
            let available = max.saturating_sub(fixed_width + 2);
            if available == 0 {
                return Line::default();
            }
            let cut: String = notification.message.chars().take(available).collect();
            format!("{}… ", cut)
        }
        _ => format!("{} ", notification.message),
    };

    Line::from(vec![
        Span::raw(TITLE_SEPARATOR),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
