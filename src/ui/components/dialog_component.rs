//! Application-wide modal dialogs (help and logs).
//!
//! Forms and delete confirmations are owned by the page that opened them;
//! this component only hosts the dialogs that are the same on every page.

use crate::logger::Logger;
use crate::ui::components::dialogs::{render_help_dialog, render_logs_dialog};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SCROLL: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
    }

    fn set_scroll(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if dialog_type == DialogType::Help => Action::HideDialog,
            KeyCode::Char('G') if dialog_type == DialogType::Logs => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => Action::DialogScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::DialogScrollDown,
            KeyCode::PageUp => {
                self.set_scroll(self.scroll_offset.saturating_sub(PAGE_SCROLL));
                Action::None
            }
            KeyCode::PageDown => {
                self.set_scroll(self.scroll_offset.saturating_add(PAGE_SCROLL));
                Action::None
            }
            KeyCode::Home => Action::DialogScrollToTop,
            KeyCode::End => Action::DialogScrollToBottom,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::DialogScrollUp => {
                self.set_scroll(self.scroll_offset.saturating_sub(1));
                Action::None
            }
            Action::DialogScrollDown => {
                self.set_scroll(self.scroll_offset.saturating_add(1));
                Action::None
            }
            Action::DialogScrollToTop => {
                self.set_scroll(0);
                Action::None
            }
            Action::DialogScrollToBottom => {
                // Clamped to the content when rendering
                self.set_scroll(usize::MAX);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state),
            Some(DialogType::Logs) => {
                render_logs_dialog(f, rect, &self.logger, self.scroll_offset, &mut self.scrollbar_state)
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn show_and_hide() {
        let mut dialog = DialogComponent::new(Logger::new());
        assert!(!dialog.is_visible());

        assert_eq!(dialog.update(Action::ShowDialog(DialogType::Logs)), Action::None);
        assert!(dialog.is_visible());

        let action = dialog.handle_key_events(key(KeyCode::Char('G')));
        assert_eq!(action, Action::HideDialog);
        dialog.update(action);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn scrolling_saturates_at_top() {
        let mut dialog = DialogComponent::new(Logger::new());
        dialog.update(Action::ShowDialog(DialogType::Help));
        dialog.update(Action::DialogScrollUp);
        assert_eq!(dialog.scroll_offset, 0);
        dialog.update(Action::DialogScrollDown);
        dialog.update(Action::DialogScrollDown);
        assert_eq!(dialog.scroll_offset, 2);
        dialog.update(Action::DialogScrollToTop);
        assert_eq!(dialog.scroll_offset, 0);
    }

    #[test]
    fn unrelated_actions_pass_through() {
        let mut dialog = DialogComponent::new(Logger::new());
        assert_eq!(dialog.update(Action::Quit), Action::Quit);
    }
}
