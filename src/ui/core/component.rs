use super::actions::Action;
use crate::signals::AppSignals;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}

/// A page of the dashboard.
///
/// Pages keep only view state (selection, open dialogs, search input). The
/// data they show is owned by the application and lent to every call, so a
/// page never holds a stale copy.
pub trait PageComponent {
    type Data;

    /// Called every time the page becomes visible.
    fn on_mount(&mut self, _data: &mut Self::Data, _signals: &mut AppSignals) {}

    fn handle_key_events(&mut self, key: KeyEvent, data: &mut Self::Data) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect, data: &Self::Data);

    /// True while the page is reading text or a modal is open, in which case
    /// global shortcuts must not fire.
    fn is_capturing_input(&self) -> bool {
        false
    }

    /// One-line shortcut summary for the status bar
    fn key_hints(&self) -> &'static str;
}
