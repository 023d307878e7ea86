//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::App;
use crate::ui::views::FILTER_BAR_HEIGHT;
use crate::ui::widgets::{render_error_banner, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.clear_expired_notification();
        let notification = self.notification.clone();

        // Bottom row belongs to the status bar
        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        self.log_view.render(frame, main_area, notification.as_ref());
        render_status_bar(frame);

        // Error banner sits on the table's bottom border, above the filter bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, FILTER_BAR_HEIGHT + 1);
        }
    }
}
