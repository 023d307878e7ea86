//! Rendering for LogView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::model::{CommitRecord, Notification};
use crate::ui::{components, symbols, theme};

use super::{FILTER_BAR_HEIGHT, LogView};

/// Width of the date column (YYYY-MM-DD)
const DATE_WIDTH: u16 = 10;
/// Bounds of the author column width
const AUTHOR_MIN_WIDTH: u16 = 6;
const AUTHOR_MAX_WIDTH: u16 = 24;

impl LogView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let [table_area, filter_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(FILTER_BAR_HEIGHT)])
                .areas(area);

        self.render_commit_table(frame, table_area, notification);
        self.render_filter_bar(frame, filter_area);
    }

    fn render_commit_table(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
    ) {
        let title = self.build_title();

        let available_for_notif = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if self.visible_indices.is_empty() {
            let (text, hint) = if self.commits.is_empty() {
                (symbols::empty::NO_COMMITS, symbols::empty::NO_COMMITS_HINT)
            } else {
                (symbols::empty::NO_MATCHES, symbols::empty::NO_MATCHES_HINT)
            };
            frame.render_widget(components::empty_state(text, Some(hint)).block(block), area);
            return;
        }

        // borders + header row
        let visible_rows = area.height.saturating_sub(3) as usize;
        if visible_rows == 0 {
            frame.render_widget(block, area);
            return;
        }

        self.scroll_offset = self.calculate_scroll_offset(visible_rows);

        let rows: Vec<Row> = self
            .visible_indices
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_rows)
            .map(|(cursor, &index)| {
                Self::build_row(&self.commits[index], cursor == self.selection_cursor)
            })
            .collect();

        let header = Row::new(symbols::COLUMN_TITLES.map(Cell::from))
            .style(Style::default().fg(theme::log_view::HEADER).bold());

        let table = Table::new(rows, self.column_widths())
            .header(header)
            .column_spacing(1)
            .block(block);

        frame.render_widget(table, area);
    }

    fn build_title(&self) -> Line<'static> {
        let mut title = format!(" gitmon - {} ", self.repo_name);
        if let Some(ref branch) = self.branch {
            title.push_str(&format!("[{}] ", branch));
        }
        if self.filter.is_active() {
            title.push_str(&format!(
                "[Filter: {}] ({}/{}) ",
                self.filter.label(),
                self.visible_count(),
                self.commits.len()
            ));
        }
        // Left-aligned so the right-aligned notification never overlaps it
        Line::from(title).bold().fg(theme::log_view::TITLE)
    }

    fn column_widths(&self) -> [Constraint; 4] {
        let id_width = self
            .visible_commits()
            .map(|c| c.short_id.chars().count())
            .max()
            .unwrap_or(0)
            .max(symbols::COLUMN_TITLES[0].len()) as u16;

        let author_width = self
            .visible_commits()
            .map(|c| c.author.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(AUTHOR_MIN_WIDTH as usize, AUTHOR_MAX_WIDTH as usize) as u16;

        [
            Constraint::Length(id_width),
            Constraint::Length(DATE_WIDTH),
            Constraint::Length(author_width),
            Constraint::Min(10),
        ]
    }

    fn build_row(commit: &CommitRecord, is_selected: bool) -> Row<'static> {
        let mut message_spans = Vec::new();
        if !commit.refs.is_empty() {
            message_spans.push(Span::styled(
                format!("({}) ", commit.refs.join(", ")),
                Style::default().fg(theme::log_view::REFS),
            ));
        }
        message_spans.push(Span::raw(commit.display_message().to_string()));

        let cells = vec![
            Cell::from(commit.short_id.clone()).fg(theme::log_view::COMMIT_ID),
            Cell::from(commit.date.clone()).fg(theme::log_view::DATE),
            Cell::from(commit.author.clone()).fg(theme::log_view::AUTHOR),
            Cell::from(Line::from(message_spans)),
        ];

        let row = Row::new(cells);
        if is_selected {
            row.style(
                Style::default()
                    .bg(theme::log_view::SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            row
        }
    }

    fn calculate_scroll_offset(&self, visible_rows: usize) -> usize {
        let mut offset = self.scroll_offset;

        // Ensure selected row is visible
        if self.selection_cursor < offset {
            offset = self.selection_cursor;
        } else if self.selection_cursor >= offset + visible_rows {
            offset = self.selection_cursor + 1 - visible_rows;
        }

        offset
    }

    /// Render the button row and remember each button's area for mouse clicks
    fn render_filter_bar(&mut self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(Line::from(symbols::FILTER_BAR_TITLE));
        let inner = block.inner(area);
        self.button_areas.clear();

        let active = self.active_button();
        let mut spans = Vec::new();
        let mut x = inner.x;

        for (index, label) in self.filter_labels.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
                x = x.saturating_add(1);
            }

            let text = match index {
                0..=8 => format!(" {}:{} ", index + 1, label),
                _ => format!(" {} ", label),
            };
            let style = if active == Some(index) {
                Style::default()
                    .fg(theme::filter_bar::ACTIVE_FG)
                    .bg(theme::filter_bar::ACTIVE_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::filter_bar::INACTIVE_FG)
            };
            let span = Span::styled(text, style);
            let width = span.width() as u16;

            // Buttons cut off by the right border are not clickable
            let button_area = if inner.height > 0 && x.saturating_add(width) <= inner.right() {
                Rect::new(x, inner.y, width, 1)
            } else {
                Rect::default()
            };
            self.button_areas.push(button_area);
            x = x.saturating_add(width);
            spans.push(span);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
