//! Sidebar navigation component for the admin dashboard.
//!
//! Lists every page with its number key and an optional count badge (unread
//! notifications, for instance) and highlights the page on screen.

use crate::ui::core::{actions::Action, Component, Page};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::collections::HashMap;

pub struct SidebarComponent {
    pub selection: Page,
    badges: HashMap<Page, usize>,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl SidebarComponent {
    pub fn new(selection: Page) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(selection.index()));
        Self {
            selection,
            badges: HashMap::new(),
            list_state,
        }
    }

    /// Show `count` next to the page name; zero hides the badge
    pub fn set_badge(&mut self, page: Page, count: usize) {
        if count == 0 {
            self.badges.remove(&page);
        } else {
            self.badges.insert(page, count);
        }
    }

    pub fn badge(&self, page: Page) -> Option<usize> {
        self.badges.get(&page).copied()
    }

    fn select(&mut self, page: Page) {
        self.selection = page;
        self.list_state.select(Some(page.index()));
    }

    fn item(&self, page: Page) -> ListItem<'static> {
        let selected = page == self.selection;
        let name_style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(format!("{} ", page.index() + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(page.title().to_string(), name_style),
        ];
        if let Some(count) = self.badge(page) {
            spans.push(Span::styled(format!(" ({})", count), Style::default().fg(Color::Yellow)));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) => Page::from_digit(c).map_or(Action::None, Action::Navigate),
            KeyCode::Tab => Action::Navigate(self.selection.next()),
            KeyCode::BackTab => Action::Navigate(self.selection.previous()),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::Navigate(page) = action {
            self.select(page);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = Page::ALL.iter().map(|page| self.item(*page)).collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Admin ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
