//! Status bar component
//!
//! Shows the current page's shortcuts, replaced for a few seconds by a toast
//! whenever an action reports success or failure.

use crate::constants::TOAST_SECONDS;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

pub struct StatusBar {
    hints: &'static str,
    toast: Option<Toast>,
    lifetime: Duration,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            hints: "",
            toast: None,
            lifetime: Duration::from_secs(TOAST_SECONDS),
        }
    }

    pub fn set_hints(&mut self, hints: &'static str) {
        self.hints = hints;
    }

    pub fn show(&mut self, message: String, level: ToastLevel) {
        self.toast = Some(Toast {
            message,
            level,
            shown_at: Instant::now(),
        });
    }

    /// The toast on screen, if it has not expired yet
    pub fn current_toast(&self) -> Option<&Toast> {
        self.toast.as_ref().filter(|toast| toast.shown_at.elapsed() < self.lifetime)
    }

    /// Drop an expired toast. Returns true when the bar changed.
    pub fn expire(&mut self) -> bool {
        if self.toast.is_some() && self.current_toast().is_none() {
            self.toast = None;
            return true;
        }
        false
    }
}

impl Component for StatusBar {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Info(message) => {
                self.show(message, ToastLevel::Info);
                Action::None
            }
            Action::Error(message) => {
                log::warn!("{}", message);
                self.show(message, ToastLevel::Error);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (text, color) = match self.current_toast() {
            Some(toast) => (
                toast.message.clone(),
                match toast.level {
                    ToastLevel::Info => Color::Green,
                    ToastLevel::Error => Color::Red,
                },
            ),
            None => (format!("{} • ?: help • q: quit", self.hints), Color::Gray),
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_are_consumed_from_actions() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.update(Action::Info("saved".into())), Action::None);
        let toast = bar.current_toast().unwrap();
        assert_eq!(toast.message, "saved");
        assert_eq!(toast.level, ToastLevel::Info);

        assert_eq!(bar.update(Action::Error("boom".into())), Action::None);
        assert_eq!(bar.current_toast().unwrap().level, ToastLevel::Error);
        assert_eq!(bar.update(Action::Quit), Action::Quit);
    }

    #[test]
    fn toast_expires_after_lifetime() {
        let mut bar = StatusBar::new();
        bar.lifetime = Duration::ZERO;
        bar.show("gone".into(), ToastLevel::Info);
        assert!(bar.current_toast().is_none());
        assert!(bar.expire());
        assert!(!bar.expire());
    }
}
