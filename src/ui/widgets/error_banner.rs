//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message above the bottom `reserved_rows` of the screen
pub fn render_error_banner(frame: &mut Frame, error: &str, reserved_rows: u16) {
    let area = frame.area();
    if area.height <= reserved_rows + 1 {
        return;
    }

    let error_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - reserved_rows - 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), error_area);
}
