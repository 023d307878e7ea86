//! Input handling for LogView

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::keys;
use crate::model::CommitFilter;

use super::{LogAction, LogView};

impl LogView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> LogAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.move_down();
                LogAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                LogAction::None
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                LogAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom();
                LogAction::None
            }
            k if keys::is_filter_next(k) => Self::filter_action(self.cycle_filter(true)),
            k if keys::is_filter_prev(k) => Self::filter_action(self.cycle_filter(false)),
            k if k == keys::FILTER_CLEAR => {
                self.set_filter(CommitFilter::All);
                LogAction::FilterChanged(CommitFilter::All)
            }
            k => match keys::filter_button_index(k) {
                Some(index) => Self::filter_action(self.select_button(index)),
                None => LogAction::None,
            },
        }
    }

    /// Handle mouse event and return action
    ///
    /// A left click on a filter button selects it; the wheel scrolls the selection.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> LogAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.button_at(mouse.column, mouse.row) {
                    Some(index) => Self::filter_action(self.select_button(index)),
                    None => LogAction::None,
                }
            }
            MouseEventKind::ScrollDown => {
                self.move_down();
                LogAction::None
            }
            MouseEventKind::ScrollUp => {
                self.move_up();
                LogAction::None
            }
            _ => LogAction::None,
        }
    }

    fn filter_action(selected: Option<CommitFilter>) -> LogAction {
        selected.map_or(LogAction::None, LogAction::FilterChanged)
    }
}
