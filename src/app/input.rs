//! Input handling for the application

use crossterm::event::{KeyEvent, MouseEvent};

use super::state::App;
use crate::keys;
use crate::model::filter;
use crate::ui::views::LogAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.execute_refresh();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            keys::REFRESH => self.execute_refresh(),
            keys::PULL => self.execute_pull(),
            _ => {
                let action = self.log_view.handle_key(key);
                self.handle_log_action(action);
            }
        }
    }

    /// Handle mouse events (filter button clicks, wheel)
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let action = self.log_view.handle_mouse(mouse);
        self.handle_log_action(action);
    }

    fn handle_log_action(&mut self, action: LogAction) {
        match action {
            LogAction::None => {}
            LogAction::FilterChanged(selected) => {
                let shown = filter::visible_commits(&self.log_view.commits, &selected).count();
                tracing::info!(filter = selected.label(), shown, "filter selected");
                self.notify_info(format!(
                    "Filter: {} ({} of {} commits)",
                    selected.label(),
                    shown,
                    self.log_view.commits.len()
                ));
            }
        }
    }
}
